//! Flight fixtures for creating in-memory test data.

use chrono::{NaiveDate, NaiveDateTime};
use entity::flight;

/// Default flight number.
pub const DEFAULT_FLIGHT_NUMBER: &str = "TK1";

/// Default passenger capacity.
pub const DEFAULT_PASSENGER_CAPACITY: Option<i32> = Some(180);

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Creates a scheduled flight entity model with default values.
///
/// # Default Values
/// - id: `1`, flight_number: `"TK1"`
/// - route: IST -> ESB, `DOMESTIC`
/// - scheduled 2024-06-01 09:00 -> 11:30
/// - status: `"SCHEDULED"`, no actual times or delay
/// - passenger_capacity: `Some(180)`, booked_passengers: `None`
/// - active: `true`, version: `0`
///
/// # Returns
/// - `flight::Model` - In-memory flight entity
pub fn entity() -> flight::Model {
    flight::Model {
        id: 1,
        flight_number: DEFAULT_FLIGHT_NUMBER.to_string(),
        airline_code: "TK".to_string(),
        aircraft_registration: None,
        departure_station_code: "IST".to_string(),
        arrival_station_code: "ESB".to_string(),
        flight_date: at(9, 0),
        scheduled_departure_time: at(9, 0),
        scheduled_arrival_time: at(11, 30),
        actual_departure_time: None,
        actual_arrival_time: None,
        status: "SCHEDULED".to_string(),
        flight_type: "DOMESTIC".to_string(),
        gate: None,
        terminal: None,
        delay_minutes: None,
        duration_minutes: None,
        distance_km: None,
        passenger_capacity: DEFAULT_PASSENGER_CAPACITY,
        booked_passengers: None,
        description: None,
        active: true,
        version: 0,
        created_at: at(0, 0),
        updated_at: at(0, 0),
    }
}
