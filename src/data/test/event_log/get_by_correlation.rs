use super::*;

/// Tests reading every event sharing a correlation ID.
///
/// Expected: Ok with only the correlated events
#[tokio::test]
async fn returns_correlated_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = EventLogFactory::new(db)
        .correlation_id("diversion-17")
        .event_timestamp(june(1, 8, 0))
        .build()
        .await?;
    let second = EventLogFactory::new(db)
        .entity("FLIGHT_LEG", "TK1")
        .correlation_id("diversion-17")
        .event_timestamp(june(1, 8, 5))
        .build()
        .await?;
    factory::create_event_log(db).await?;

    let events = EventLogRepository::new(db)
        .get_by_correlation("diversion-17")
        .await?;

    assert_eq!(
        events.iter().map(|event| event.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}
