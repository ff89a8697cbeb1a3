use crate::{
    error::AppError,
    event::{EntityType, EventKind, MemoryEventPublisher},
    model::aircraft::{CreateAircraftParams, UpdateAircraftParams},
    service::aircraft::AircraftService,
};
use test_utils::{builder::TestBuilder, factory, factory::aircraft::AircraftFactory};

mod update;

fn params(registration: &str, airline_id: i32) -> CreateAircraftParams {
    CreateAircraftParams {
        registration: registration.to_string(),
        aircraft_type: "A321".to_string(),
        model: Some("A321neo".to_string()),
        manufacturer: Some("Airbus".to_string()),
        capacity: Some(220),
        max_range: Some(7_400),
        cruise_speed: Some(833),
        airline_id,
    }
}
