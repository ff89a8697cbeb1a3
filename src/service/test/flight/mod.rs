use crate::{
    cache::FlightCache,
    error::{flight::FlightError, AppError},
    event::{EntityType, EventKind, MemoryEventPublisher},
    model::{
        flight::{CreateFlightParams, UpdateFlightParams},
        flight_leg::CreateFlightLegParams,
        lifecycle::FlightEvent,
        status::{FlightStatus, FlightType},
    },
    service::flight::FlightService,
};
use test_utils::{builder::TestBuilder, factory, factory::helpers::june};


fn create_params(flight_number: &str) -> CreateFlightParams {
    CreateFlightParams {
        flight_number: flight_number.to_string(),
        airline_code: "TK".to_string(),
        aircraft_registration: None,
        departure_station_code: "IST".to_string(),
        arrival_station_code: "AYT".to_string(),
        flight_date: june(10, 14, 0),
        scheduled_departure_time: june(10, 14, 0),
        scheduled_arrival_time: june(10, 15, 25),
        flight_type: FlightType::Domestic,
        gate: None,
        terminal: Some("D".to_string()),
        duration_minutes: Some(85),
        distance_km: Some(480),
        passenger_capacity: Some(189),
        description: None,
    }
}
