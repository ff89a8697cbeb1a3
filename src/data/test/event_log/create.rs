use super::*;

/// Tests archiving an event.
///
/// Expected: Ok with every field stored and archived_at stamped
#[tokio::test]
async fn archives_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EventLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now().naive_utc();
    let repo = EventLogRepository::new(db);
    let result = repo
        .create(CreateEventLogParams {
            event_type: "DELAYED".to_string(),
            source_service: "flight-service".to_string(),
            entity_type: "FLIGHT".to_string(),
            entity_id: "TK1".to_string(),
            event_timestamp: june(1, 8, 0),
            event_data: Some(r#"{"delay_minutes":30}"#.to_string()),
            correlation_id: Some("ops-1".to_string()),
            user_id: None,
        })
        .await;

    assert!(result.is_ok());
    let event = result.unwrap();
    assert_eq!(event.event_type, "DELAYED");
    assert_eq!(event.entity_id, "TK1");
    assert_eq!(event.event_timestamp, june(1, 8, 0));
    assert_eq!(event.event_data.as_deref(), Some(r#"{"delay_minutes":30}"#));
    assert!(event.archived_at >= before);

    let stored = repo.get_by_id(event.id).await?;
    assert_eq!(stored, Some(event));

    Ok(())
}
