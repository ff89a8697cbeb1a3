use super::*;

/// Tests reading the history of a single entity.
///
/// Verifies that events about other entities are excluded and the history is
/// returned in the order the events occurred.
///
/// Expected: Ok with the two TK1 events, oldest first
#[tokio::test]
async fn returns_entity_history_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let delayed = EventLogFactory::new(db)
        .event_type("DELAYED")
        .entity("FLIGHT", "TK1")
        .event_timestamp(june(1, 9, 0))
        .build()
        .await?;
    let created = EventLogFactory::new(db)
        .event_type("CREATED")
        .entity("FLIGHT", "TK1")
        .event_timestamp(june(1, 8, 0))
        .build()
        .await?;
    EventLogFactory::new(db)
        .entity("FLIGHT", "TK2")
        .build()
        .await?;
    EventLogFactory::new(db)
        .entity("FLIGHT_SCHEDULE", "TK1")
        .build()
        .await?;

    let history = EventLogRepository::new(db)
        .get_by_entity("FLIGHT", "TK1")
        .await?;

    assert_eq!(
        history.iter().map(|event| event.id).collect::<Vec<_>>(),
        vec![created.id, delayed.id]
    );

    Ok(())
}
