use super::*;

/// Tests a version-checked update.
///
/// Verifies that the operational fields are written and that the version is
/// incremented by exactly one.
///
/// Expected: Ok with fields updated and version 1
#[tokio::test]
async fn updates_fields_and_increments_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_flight(db).await?;

    let repo = FlightRepository::new(db);
    let mut flight = repo.get_by_id(created.id).await?.unwrap();
    flight.gate = Some("B7".to_string());
    flight.state.status = FlightStatus::Boarding;
    flight.booked_passengers = Some(150);

    let updated = repo.update(flight).await?;

    assert_eq!(updated.gate.as_deref(), Some("B7"));
    assert_eq!(updated.status(), FlightStatus::Boarding);
    assert_eq!(updated.booked_passengers, Some(150));
    assert_eq!(updated.version, 1);
    assert_eq!(updated.created_at, created.created_at);

    Ok(())
}

/// Tests writing a flight read at an outdated version.
///
/// Verifies that the second of two writers holding the same version is
/// rejected and that the first write is preserved.
///
/// Expected: Err(DbErr::RecordNotUpdated) and the stored gate unchanged
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_flight(db).await?;

    let repo = FlightRepository::new(db);
    let mut first = repo.get_by_id(created.id).await?.unwrap();
    let mut second = first.clone();

    first.gate = Some("A1".to_string());
    repo.update(first).await?;

    second.gate = Some("C3".to_string());
    let result = repo.update(second).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    let stored = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(stored.gate.as_deref(), Some("A1"));
    assert_eq!(stored.version, 1);

    Ok(())
}

/// Tests updating a flight that does not exist.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_missing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightRepository::new(db);
    let mut flight = repo
        .create(new_flight("TK4001", june(5, 9, 0), june(5, 10, 0)))
        .await?;
    flight.id += 100;

    let result = repo.update(flight).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
