use super::*;

/// Tests getting an existing flight by ID.
///
/// Expected: Ok(Some) with the factory-created flight
#[tokio::test]
async fn returns_existing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_flight(db).await?;

    let repo = FlightRepository::new(db);
    let flight = repo.get_by_id(created.id).await?;

    assert!(flight.is_some());
    let flight = flight.unwrap();
    assert_eq!(flight.id, created.id);
    assert_eq!(flight.flight_number, created.flight_number);

    Ok(())
}

/// Tests that soft deleted flights are still returned by ID.
///
/// Expected: Ok(Some) with active false
#[tokio::test]
async fn returns_inactive_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::flight::FlightFactory::new(db)
        .active(false)
        .build()
        .await?;

    let flight = FlightRepository::new(db).get_by_id(created.id).await?;

    assert!(flight.is_some_and(|flight| !flight.active));

    Ok(())
}

/// Tests getting a flight that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = FlightRepository::new(db).get_by_id(999).await?;

    assert!(flight.is_none());

    Ok(())
}

/// Tests reading a row whose status column holds an unknown value.
///
/// Verifies that the unknown status surfaces as a custom database error rather
/// than being mapped to a default status.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::flight::FlightFactory::new(db)
        .status("TELEPORTED")
        .build()
        .await?;

    let result = FlightRepository::new(db).get_by_id(created.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
