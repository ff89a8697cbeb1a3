use super::*;

/// Tests updating an airline's name and city.
///
/// Expected: Ok with the new values, version bumped and an `UPDATED` event
#[tokio::test]
async fn updates_airline() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    let created = AirlineFactory::new(db).code("TK").build().await?;

    let updated = AirlineService::new(db, &events)
        .update(
            "TK",
            created.version,
            UpdateAirlineParams {
                airline_name: Some("Turkish Airlines".to_string()),
                city: Some("Ankara".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.airline_name, "Turkish Airlines");
    assert_eq!(updated.city.as_deref(), Some("Ankara"));
    assert_eq!(updated.version, created.version + 1);
    assert_eq!(events.events()[0].event_type, EventKind::Updated);

    Ok(())
}

/// Tests changing only the casing of an airline's own name.
///
/// Expected: Ok, the airline's current name does not count as a conflict
#[tokio::test]
async fn allows_recasing_own_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    let created = AirlineFactory::new(db)
        .code("PC")
        .name("Pegasus airlines")
        .build()
        .await?;

    let updated = AirlineService::new(db, &events)
        .update(
            "PC",
            created.version,
            UpdateAirlineParams {
                airline_name: Some("Pegasus Airlines".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.airline_name, "Pegasus Airlines");

    Ok(())
}

/// Tests renaming an airline to another airline's name.
///
/// Expected: Err(AppError::Conflict) and no event
#[tokio::test]
async fn rejects_name_of_other_airline() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    AirlineFactory::new(db).name("AnadoluJet").build().await?;
    let created = AirlineFactory::new(db).code("TK").build().await?;

    let result = AirlineService::new(db, &events)
        .update(
            "TK",
            created.version,
            UpdateAirlineParams {
                airline_name: Some("anadolujet".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(events.events().is_empty());

    Ok(())
}

/// Tests updating with a version the caller no longer holds.
///
/// Expected: Err(AppError::StaleVersion)
#[tokio::test]
async fn rejects_stale_version() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    let created = AirlineFactory::new(db).code("TK").build().await?;

    let result = AirlineService::new(db, &events)
        .update("TK", created.version + 1, UpdateAirlineParams::default())
        .await;

    assert!(matches!(result, Err(AppError::StaleVersion { .. })));

    Ok(())
}

/// Tests updating an airline code nobody holds.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    let result = AirlineService::new(db, &events)
        .update("ZZ", 0, UpdateAirlineParams::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
