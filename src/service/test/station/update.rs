use super::*;

/// Tests updating a station's timezone and name.
///
/// Expected: Ok with the new values and an `UPDATED` event
#[tokio::test]
async fn updates_station() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    let created = factory::create_station(db).await?;

    let updated = StationService::new(db, &events)
        .update(
            created.id,
            created.version,
            UpdateStationParams {
                station_name: Some("Renamed Station".to_string()),
                timezone: Some("Europe/London".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.station_name, "Renamed Station");
    assert_eq!(updated.timezone.as_deref(), Some("Europe/London"));
    assert_eq!(updated.station_code, created.station_code);
    assert_eq!(events.events()[0].event_type, EventKind::Updated);

    Ok(())
}

/// Tests renaming a station to another station's name.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_name_of_other_station() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    StationFactory::new(db).name("Istanbul Airport").build().await?;
    let created = factory::create_station(db).await?;

    let result = StationService::new(db, &events)
        .update(
            created.id,
            created.version,
            UpdateStationParams {
                station_name: Some("istanbul airport".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests soft deleting a station and listing by country afterwards.
///
/// Expected: Ok, a `DELETED` event, and the station absent from its country listing
#[tokio::test]
async fn soft_deletes_station() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();
    let service = StationService::new(db, &events);

    let kept = StationFactory::new(db).country("Cyprus").build().await?;
    let deleted = StationFactory::new(db).country("Cyprus").build().await?;

    service.delete(deleted.id).await?;

    let remaining = service.get_by_country("Cyprus").await?;
    assert_eq!(remaining.iter().map(|s| s.id).collect::<Vec<_>>(), [kept.id]);
    assert_eq!(events.events()[0].event_type, EventKind::Deleted);
    assert!(matches!(
        service.delete(deleted.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests reactivating a deactivated station.
///
/// Expected: Ok with active true and a `STATUS_CHANGED` event
#[tokio::test]
async fn reactivates_station() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    let created = StationFactory::new(db).active(false).build().await?;

    let station = StationService::new(db, &events)
        .set_active(created.id, true)
        .await?;

    assert!(station.active);
    assert_eq!(events.events()[0].event_type, EventKind::StatusChanged);

    Ok(())
}
