use super::*;

/// Tests adding a leg to a flight.
///
/// Expected: Ok with a `SCHEDULED` leg at version 0
#[tokio::test]
async fn creates_scheduled_leg() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;

    let repo = FlightLegRepository::new(db);
    let result = repo.create(leg_params(flight.id, 2)).await;

    assert!(result.is_ok());
    let leg = result.unwrap();
    assert_eq!(leg.flight_id, flight.id);
    assert_eq!(leg.leg_number, 2);
    assert_eq!(leg.state.status, FlightStatus::Scheduled);
    assert_eq!(leg.ground_time_minutes, Some(50));
    assert_eq!(leg.version, 0);

    Ok(())
}

/// Tests the leg number existence check.
///
/// Expected: true for the taken number, false for a free one and for another flight
#[tokio::test]
async fn detects_taken_leg_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (flight, _legs) = factory::helpers::create_flight_with_legs(db).await?;
    let other = factory::create_flight(db).await?;

    let repo = FlightLegRepository::new(db);

    assert!(repo.leg_number_exists(flight.id, 2).await?);
    assert!(!repo.leg_number_exists(flight.id, 3).await?);
    assert!(!repo.leg_number_exists(other.id, 1).await?);

    Ok(())
}
