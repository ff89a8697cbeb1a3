use crate::{
    data::flight_leg::FlightLegRepository,
    model::{flight_leg::CreateFlightLegParams, status::FlightStatus},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::june};

mod create;
mod get_by_flight;

fn leg_params(flight_id: i32, leg_number: i32) -> CreateFlightLegParams {
    CreateFlightLegParams {
        flight_id,
        leg_number,
        departure_station_code: "ESB".to_string(),
        arrival_station_code: "ADB".to_string(),
        scheduled_departure_time: june(1, 11, 0),
        scheduled_arrival_time: june(1, 12, 15),
        gate: Some("204".to_string()),
        terminal: None,
        duration_minutes: Some(75),
        distance_km: Some(520),
        ground_time_minutes: Some(50),
        description: None,
    }
}
