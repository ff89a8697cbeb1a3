//! Flight schedule fixtures for creating in-memory test data.
//!
//! Provides a schedule entity model without database insertion. The factory in
//! `factory::flight_schedule` uses the same defaults.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use entity::flight_schedule;

/// Default flight number.
pub const DEFAULT_FLIGHT_NUMBER: &str = "TK100";

/// Default airline code.
pub const DEFAULT_AIRLINE_CODE: &str = "TK";

/// Default departure station.
pub const DEFAULT_DEPARTURE_STATION: &str = "IST";

/// Default arrival station.
pub const DEFAULT_ARRIVAL_STATION: &str = "ESB";

/// Default flight type.
pub const DEFAULT_FLIGHT_TYPE: &str = "DOMESTIC";

/// Default passenger capacity.
pub const DEFAULT_PASSENGER_CAPACITY: Option<i32> = Some(180);

/// First day of the default effective window, 2024-06-01 (a Saturday).
pub fn default_effective_from() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// Last day of the default effective window, 2024-06-30.
pub fn default_effective_to() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

/// Creates a flight schedule entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - flight_number: `"TK100"`, airline `"TK"`
/// - route: IST -> ESB, `DOMESTIC`
/// - departure `09:00`, arrival `11:30`
/// - operating_days: `None` (daily)
/// - effective 2024-06-01 through 2024-06-30
/// - passenger_capacity: `Some(180)`
/// - active: `true`, version: `0`
///
/// # Returns
/// - `flight_schedule::Model` - In-memory schedule entity
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let schedule = fixture::flight_schedule::entity();
/// assert!(schedule.operating_days.is_none());
/// ```
pub fn entity() -> flight_schedule::Model {
    let created = NaiveDateTime::new(default_effective_from(), NaiveTime::MIN);

    flight_schedule::Model {
        id: 1,
        flight_number: DEFAULT_FLIGHT_NUMBER.to_string(),
        airline_code: DEFAULT_AIRLINE_CODE.to_string(),
        aircraft_registration: None,
        departure_station_code: DEFAULT_DEPARTURE_STATION.to_string(),
        arrival_station_code: DEFAULT_ARRIVAL_STATION.to_string(),
        departure_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        arrival_time: NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
        flight_type: DEFAULT_FLIGHT_TYPE.to_string(),
        operating_days: None,
        effective_from: default_effective_from(),
        effective_to: default_effective_to(),
        duration_minutes: None,
        distance_km: None,
        passenger_capacity: DEFAULT_PASSENGER_CAPACITY,
        terminal: None,
        description: None,
        active: true,
        version: 0,
        created_at: created,
        updated_at: created,
    }
}
