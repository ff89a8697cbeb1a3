use super::*;

/// Tests pagination of active schedules.
///
/// Expected: Ok with inactive schedules excluded and results ordered by flight number
#[tokio::test]
async fn pages_active_schedules_by_flight_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FlightSchedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::flight_schedule::FlightScheduleFactory::new(db)
        .flight_number("TK300")
        .build()
        .await?;
    factory::flight_schedule::FlightScheduleFactory::new(db)
        .flight_number("TK100")
        .build()
        .await?;
    factory::flight_schedule::FlightScheduleFactory::new(db)
        .flight_number("TK200")
        .active(false)
        .build()
        .await?;

    let (schedules, total) = FlightScheduleRepository::new(db)
        .get_active_paginated(0, 10)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(
        schedules
            .iter()
            .map(|schedule| schedule.flight_number.as_str())
            .collect::<Vec<_>>(),
        vec!["TK100", "TK300"]
    );

    Ok(())
}
