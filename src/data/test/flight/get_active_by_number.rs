use super::*;

/// Tests finding the active flight for a number.
///
/// Verifies that an inactive flight with the same number is ignored.
///
/// Expected: Ok(Some) with the active flight
#[tokio::test]
async fn returns_active_flight_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::flight::FlightFactory::new(db)
        .flight_number("TK3001")
        .active(false)
        .build()
        .await?;
    let active = factory::flight::FlightFactory::new(db)
        .flight_number("TK3001")
        .build()
        .await?;

    let repo = FlightRepository::new(db);
    let flight = repo.get_active_by_number("TK3001").await?;

    assert_eq!(flight.map(|flight| flight.id), Some(active.id));

    Ok(())
}

/// Tests looking up a number held only by a soft deleted flight.
///
/// Expected: Ok(None) and the number is reported as free
#[tokio::test]
async fn ignores_inactive_flights() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::flight::FlightFactory::new(db)
        .flight_number("TK3002")
        .active(false)
        .build()
        .await?;

    let repo = FlightRepository::new(db);

    assert!(repo.get_active_by_number("TK3002").await?.is_none());
    assert!(!repo.active_number_exists("TK3002").await?);

    Ok(())
}

/// Tests the existence check for an active number.
///
/// Expected: Ok(true)
#[tokio::test]
async fn reports_active_number_as_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;

    let exists = FlightRepository::new(db)
        .active_number_exists(&flight.flight_number)
        .await?;

    assert!(exists);

    Ok(())
}
