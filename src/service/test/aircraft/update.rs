use super::*;

/// Tests transferring an aircraft between fleets.
///
/// Expected: Ok, the aircraft leaves one fleet listing and joins the other
#[tokio::test]
async fn transfers_aircraft_between_airlines() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();
    let service = AircraftService::new(db, &events);

    let from = factory::create_airline(db).await?;
    let to = factory::create_airline(db).await?;
    let created = factory::create_aircraft(db, from.id).await?;

    let updated = service
        .update(
            created.id,
            created.version,
            UpdateAircraftParams {
                airline_id: Some(to.id),
                capacity: Some(174),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.capacity, Some(174));
    assert!(service.get_by_airline(from.id).await?.is_empty());
    assert_eq!(service.get_by_airline(to.id).await?, vec![updated]);
    assert_eq!(events.events()[0].event_type, EventKind::Updated);

    Ok(())
}

/// Tests transferring an aircraft to an airline that does not exist.
///
/// Expected: Err(AppError::NotFound) and the aircraft unchanged
#[tokio::test]
async fn rejects_transfer_to_unknown_airline() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();
    let service = AircraftService::new(db, &events);

    let airline = factory::create_airline(db).await?;
    let created = factory::create_aircraft(db, airline.id).await?;

    let result = service
        .update(
            created.id,
            created.version,
            UpdateAircraftParams {
                airline_id: Some(airline.id + 100),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(
        service.get_by_id(created.id).await?.map(|a| a.airline_id),
        Some(airline.id)
    );

    Ok(())
}

/// Tests status changes and soft deletion.
///
/// Expected: `STATUS_CHANGED` then `DELETED`, and the aircraft gone from its fleet
#[tokio::test]
async fn deactivates_and_deletes_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();
    let service = AircraftService::new(db, &events);

    let airline = factory::create_airline(db).await?;
    let created = factory::create_aircraft(db, airline.id).await?;

    service.set_active(created.id, false).await?;
    assert!(service.get_by_airline(airline.id).await?.is_empty());
    assert!(matches!(
        service.delete(created.id).await,
        Err(AppError::NotFound(_))
    ));

    service.set_active(created.id, true).await?;
    service.delete(created.id).await?;

    let kinds: Vec<_> = events.events().iter().map(|e| e.event_type).collect();
    assert_eq!(
        kinds,
        [
            EventKind::StatusChanged,
            EventKind::StatusChanged,
            EventKind::Deleted
        ]
    );

    Ok(())
}

/// Tests listing the fleet of an airline that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_by_airline_returns_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let events = MemoryEventPublisher::new();

    let result = AircraftService::new(db, &events).get_by_airline(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
