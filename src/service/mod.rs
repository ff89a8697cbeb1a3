//! Service layer.
//!
//! Services orchestrate repositories, the pure domain rules, the flight cache and
//! event publishing. They return `AppError` and are constructed per call from
//! borrowed shared state (see `AppState`).

pub mod aircraft;
pub mod airline;
pub mod event_log;
pub mod flight;
pub mod flight_schedule;
pub mod station;
