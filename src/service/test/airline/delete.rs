use super::*;

/// Tests deactivating and reactivating an airline.
///
/// Expected: two `STATUS_CHANGED` events and the airline hidden from listings while inactive
#[tokio::test]
async fn toggles_active_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();
    let service = AirlineService::new(db, &events);

    let created = factory::create_airline(db).await?;

    let inactive = service.set_active(created.id, false).await?;
    assert!(!inactive.active);
    assert_eq!(service.get_paginated(0, 10).await?.total, 0);

    let active = service.set_active(created.id, true).await?;
    assert!(active.active);
    assert_eq!(active.version, created.version + 2);

    let kinds: Vec<_> = events.events().iter().map(|e| e.event_type).collect();
    assert_eq!(kinds, [EventKind::StatusChanged, EventKind::StatusChanged]);

    Ok(())
}

/// Tests soft deleting an airline.
///
/// Expected: Ok, row kept inactive, a `DELETED` event, and a second delete is NotFound
#[tokio::test]
async fn soft_deletes_airline() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();
    let service = AirlineService::new(db, &events);

    AirlineFactory::new(db).code("XQ").build().await?;

    service.delete("XQ").await?;

    let stored = service.get_by_code("XQ").await?.unwrap();
    assert!(!stored.active);
    let published = events.events();
    assert_eq!(published[0].event_type, EventKind::Deleted);
    assert_eq!(published[0].key, "XQ");
    assert!(matches!(
        service.delete("XQ").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests toggling an airline that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn set_active_returns_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    let result = AirlineService::new(db, &events).set_active(42, false).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
