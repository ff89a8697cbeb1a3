//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a datetime on a fixed day in June 2024.
///
/// Factories use this so tests can reason about exact times.
///
/// # Panics
/// Panics if `day`, `hour` or `minute` is out of range.
pub fn june(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid June 2024 datetime")
}

/// Creates a flight with two consecutive legs.
///
/// The flight runs IST -> ESB -> ADB. Leg 1 departs at 09:00 and leg 2 at 11:00.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((flight, [leg1, leg2]))` - Created flight and its legs
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_with_legs(
    db: &DatabaseConnection,
) -> Result<(entity::flight::Model, [entity::flight_leg::Model; 2]), DbErr> {
    let flight = crate::factory::flight::FlightFactory::new(db)
        .stations("IST", "ADB")
        .scheduled(june(1, 9, 0), june(1, 12, 15))
        .build()
        .await?;

    let first = crate::factory::flight_leg::FlightLegFactory::new(db, flight.id, 1)
        .stations("IST", "ESB")
        .scheduled(june(1, 9, 0), june(1, 10, 10))
        .build()
        .await?;
    let second = crate::factory::flight_leg::FlightLegFactory::new(db, flight.id, 2)
        .stations("ESB", "ADB")
        .scheduled(june(1, 11, 0), june(1, 12, 15))
        .build()
        .await?;

    Ok((flight, [first, second]))
}
