use super::*;

/// Tests creating a schedule with operating days.
///
/// Verifies that the weekday set survives the round trip through the
/// comma separated column and that new schedules start active.
///
/// Expected: Ok with Monday and Friday as operating days
#[tokio::test]
async fn creates_schedule_with_operating_days() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FlightSchedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FlightScheduleRepository::new(db);
    let result = repo
        .create(CreateFlightScheduleParams {
            flight_number: "TK1977".to_string(),
            airline_code: "TK".to_string(),
            aircraft_registration: None,
            departure_station_code: "IST".to_string(),
            arrival_station_code: "LHR".to_string(),
            departure_time: NaiveTime::from_hms_opt(23, 30, 0).unwrap(),
            arrival_time: NaiveTime::from_hms_opt(1, 45, 0).unwrap(),
            flight_type: FlightType::International,
            operating_days: [Weekday::Fri, Weekday::Mon].into_iter().collect(),
            effective_from: fixture::flight_schedule::default_effective_from(),
            effective_to: fixture::flight_schedule::default_effective_to(),
            duration_minutes: Some(255),
            distance_km: Some(2500),
            passenger_capacity: Some(300),
            terminal: Some("I".to_string()),
            description: None,
        })
        .await;

    assert!(result.is_ok());
    let schedule = result.unwrap();
    assert_eq!(
        schedule.operating_days.days().collect::<Vec<_>>(),
        vec![Weekday::Mon, Weekday::Fri]
    );
    assert_eq!(schedule.flight_type, FlightType::International);
    assert!(schedule.is_overnight());
    assert!(schedule.active);
    assert_eq!(schedule.version, 0);

    Ok(())
}

/// Tests reading a schedule stored without operating days.
///
/// Expected: Ok with the empty set, which operates daily
#[tokio::test]
async fn reads_missing_operating_days_as_daily() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FlightSchedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_flight_schedule(db).await?;

    let schedule = FlightScheduleRepository::new(db)
        .get_by_id(created.id)
        .await?
        .unwrap();

    assert_eq!(schedule.operating_days, OperatingDays::every_day());

    Ok(())
}
