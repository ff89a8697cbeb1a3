use super::*;

/// Tests creating an airline.
///
/// Expected: Ok with an active airline and a `CREATED` airline event keyed by code
#[tokio::test]
async fn creates_airline() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    let service = AirlineService::new(db, &events);
    let airline = service.create(params("TK", "Turkish Airlines")).await?;

    assert!(airline.active);
    assert_eq!(service.get_by_code("TK").await?, Some(airline.clone()));
    let published = events.events();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].event_type, EventKind::Created);
    assert_eq!(published[0].entity_type, EntityType::Airline);
    assert_eq!(published[0].key, "TK");
    assert_eq!(published[0].payload["airline_name"], "Turkish Airlines");

    Ok(())
}

/// Tests creating an airline with a code that is already taken.
///
/// Expected: Err(AppError::Conflict) and no event
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    AirlineFactory::new(db).code("TK").build().await?;

    let result = AirlineService::new(db, &events)
        .create(params("TK", "Another Carrier"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(events.events().is_empty());

    Ok(())
}

/// Tests creating an airline whose name differs from an existing one only by case.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_name_taken_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    AirlineFactory::new(db).name("Pegasus Airlines").build().await?;

    let result = AirlineService::new(db, &events)
        .create(params("PC", "PEGASUS airlines"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests field validation before any database access.
///
/// Expected: Err(ReferenceError::Length) for a four character code
#[tokio::test]
async fn rejects_invalid_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    let result = AirlineService::new(db, &events)
        .create(params("TURK", "Turkish Airlines"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReferenceErr(ReferenceError::Length { .. }))
    ));

    Ok(())
}

/// Tests two concurrent creates racing for the same code.
///
/// Expected: one succeeds, the other fails with Err(AppError::Conflict)
#[tokio::test]
async fn concurrent_creates_leave_one_airline() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    let first = AirlineService::new(db, &events);
    let second = AirlineService::new(db, &events);
    let (a, b) = tokio::join!(
        first.create(params("XQ", "SunExpress")),
        second.create(params("XQ", "Sun Express"))
    );

    let conflicts = [&a, &b]
        .iter()
        .filter(|result| matches!(result, Err(AppError::Conflict(_))))
        .count();
    assert_eq!(conflicts, 1);
    assert!(a.is_ok() || b.is_ok());
    assert_eq!(first.get_paginated(0, 10).await?.total, 1);

    Ok(())
}
