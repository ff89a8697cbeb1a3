//! SeaORM entity definitions for the flight operations schema.

pub mod prelude;

pub mod aircraft;
pub mod airline;
pub mod event_log;
pub mod flight;
pub mod flight_leg;
pub mod flight_schedule;
pub mod station;
