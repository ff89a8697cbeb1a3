use super::*;
use crate::service::flight::FlightService;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tests generating and persisting a flight from a schedule.
///
/// Verifies that the flight takes the schedule's number and times on the
/// requested date and can be found by number afterwards.
///
/// Expected: Ok with a `SCHEDULED` flight departing 2024-06-03 09:00
#[tokio::test]
async fn persists_generated_flight() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = FlightCache::new();
    let events = MemoryEventPublisher::new();

    let schedule = FlightScheduleFactory::new(db)
        .flight_number("TK2150")
        .build()
        .await?;

    let flight = FlightScheduleService::new(db, &cache, &events)
        .instantiate(schedule.id, date(6, 3))
        .await?;

    assert_eq!(flight.flight_number, "TK2150");
    assert_eq!(flight.status(), FlightStatus::Scheduled);
    assert_eq!(flight.flight_date, date(6, 3).and_time(time(9, 0)));
    assert_eq!(flight.state.scheduled_departure_time, date(6, 3).and_time(time(9, 0)));
    assert_eq!(flight.state.scheduled_arrival_time, date(6, 3).and_time(time(11, 30)));
    assert_eq!(flight.passenger_capacity, schedule.passenger_capacity);
    assert_eq!(flight.version, 0);

    let found = FlightService::new(db, &cache, &events)
        .get_by_number("TK2150")
        .await?;
    assert_eq!(found.map(|found| found.id), Some(flight.id));

    let published = events.events();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].entity_type, EntityType::Flight);
    assert_eq!(published[0].event_type, EventKind::Created);

    Ok(())
}

/// Tests generating an overnight flight.
///
/// Expected: Ok with the arrival on the following day
#[tokio::test]
async fn moves_overnight_arrival_to_next_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = FlightCache::new();
    let events = MemoryEventPublisher::new();

    let schedule = FlightScheduleFactory::new(db)
        .times(time(22, 50), time(0, 35))
        .build()
        .await?;

    let flight = FlightScheduleService::new(db, &cache, &events)
        .instantiate(schedule.id, date(6, 30))
        .await?;

    assert_eq!(flight.state.scheduled_departure_time, date(6, 30).and_time(time(22, 50)));
    assert_eq!(flight.state.scheduled_arrival_time, date(7, 1).and_time(time(0, 35)));

    Ok(())
}

/// Tests instantiating the same schedule twice.
///
/// The first flight still holds the number, so the second instantiation is
/// refused even though the dates differ.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_second_active_flight_with_same_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = FlightCache::new();
    let events = MemoryEventPublisher::new();

    let schedule = factory::create_flight_schedule(db).await?;

    let service = FlightScheduleService::new(db, &cache, &events);
    service.instantiate(schedule.id, date(6, 3)).await?;
    let result = service.instantiate(schedule.id, date(6, 4)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests two instantiations of one schedule racing each other.
///
/// Both calls may pass the up-front number check before either inserts, so the
/// partial unique index has to reject the loser.
///
/// Expected: One Ok, one Err(AppError::Conflict), and a single active flight
#[tokio::test]
async fn concurrent_instantiations_leave_one_active_flight() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = FlightCache::new();
    let events = MemoryEventPublisher::new();

    let schedule = FlightScheduleFactory::new(db)
        .flight_number("TK2160")
        .build()
        .await?;

    let first = FlightScheduleService::new(db, &cache, &events);
    let second = FlightScheduleService::new(db, &cache, &events);
    let (a, b) = tokio::join!(
        first.instantiate(schedule.id, date(6, 3)),
        second.instantiate(schedule.id, date(6, 4)),
    );

    let conflicts = [&a, &b]
        .iter()
        .filter(|result| matches!(result, Err(AppError::Conflict(_))))
        .count();
    assert_eq!(conflicts, 1);
    assert!(a.is_ok() || b.is_ok());

    let active = entity::prelude::Flight::find()
        .filter(entity::flight::Column::FlightNumber.eq("TK2160"))
        .filter(entity::flight::Column::Active.eq(true))
        .count(db)
        .await?;
    assert_eq!(active, 1);

    Ok(())
}

/// Tests instantiating on a weekday the schedule does not operate.
///
/// Expected: Err(FlightError::ScheduleNotOperating) with NotAnOperatingDay
#[tokio::test]
async fn rejects_non_operating_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = FlightCache::new();
    let events = MemoryEventPublisher::new();

    let schedule = FlightScheduleFactory::new(db)
        .operating_days(Some("MONDAY,WEDNESDAY,FRIDAY"))
        .build()
        .await?;

    // 2024-06-04 is a Tuesday
    let result = FlightScheduleService::new(db, &cache, &events)
        .instantiate(schedule.id, date(6, 4))
        .await;

    assert!(matches!(
        result,
        Err(AppError::FlightErr(FlightError::ScheduleNotOperating {
            reason: NotOperatingReason::NotAnOperatingDay,
            ..
        }))
    ));
    assert!(events.events().is_empty());

    Ok(())
}

/// Tests instantiating outside the effective window.
///
/// Expected: Err(FlightError::ScheduleNotOperating) with AfterEffectiveTo
#[tokio::test]
async fn rejects_date_after_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = FlightCache::new();
    let events = MemoryEventPublisher::new();

    let schedule = factory::create_flight_schedule(db).await?;

    let result = FlightScheduleService::new(db, &cache, &events)
        .instantiate(schedule.id, date(7, 1))
        .await;

    assert!(matches!(
        result,
        Err(AppError::FlightErr(FlightError::ScheduleNotOperating {
            reason: NotOperatingReason::AfterEffectiveTo,
            ..
        }))
    ));

    Ok(())
}

/// Tests instantiating a deactivated schedule.
///
/// Expected: Err(FlightError::ScheduleInactive)
#[tokio::test]
async fn rejects_inactive_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = FlightCache::new();
    let events = MemoryEventPublisher::new();

    let schedule = FlightScheduleFactory::new(db).active(false).build().await?;

    let result = FlightScheduleService::new(db, &cache, &events)
        .instantiate(schedule.id, date(6, 3))
        .await;

    assert!(matches!(
        result,
        Err(AppError::FlightErr(FlightError::ScheduleInactive(id))) if id == schedule.id
    ));

    Ok(())
}

/// Tests instantiating a schedule that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = FlightCache::new();
    let events = MemoryEventPublisher::new();

    let result = FlightScheduleService::new(db, &cache, &events)
        .instantiate(404, date(6, 3))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
