use super::*;

/// Tests listing the legs of a flight.
///
/// Verifies that legs are ordered by leg number regardless of insert order
/// and that legs of other flights are excluded.
///
/// Expected: Ok with legs 1, 2, 3 of the flight
#[tokio::test]
async fn returns_legs_in_leg_number_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;
    let other = factory::create_flight(db).await?;
    factory::create_flight_leg(db, flight.id, 3).await?;
    factory::create_flight_leg(db, flight.id, 1).await?;
    factory::create_flight_leg(db, other.id, 1).await?;
    factory::create_flight_leg(db, flight.id, 2).await?;

    let legs = FlightLegRepository::new(db).get_by_flight(flight.id).await?;

    assert_eq!(
        legs.iter().map(|leg| leg.leg_number).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert!(legs.iter().all(|leg| leg.flight_id == flight.id));

    Ok(())
}

/// Tests listing legs of a flight without any.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_flight_without_legs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let flight = factory::create_flight(db).await?;

    let legs = FlightLegRepository::new(db).get_by_flight(flight.id).await?;

    assert!(legs.is_empty());

    Ok(())
}
