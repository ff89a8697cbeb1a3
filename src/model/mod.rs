//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary, so the
//! service layer never sees raw status strings or operating-day columns. The schedule
//! generator (`flight_schedule`) and the lifecycle rules (`lifecycle`) are pure and
//! perform no I/O; persistence and version checks belong to the data layer.

pub mod aircraft;
pub mod airline;
pub mod event_log;
pub mod flight;
pub mod flight_leg;
pub mod flight_schedule;
pub mod lifecycle;
pub mod pagination;
pub(crate) mod reference;
pub mod station;
pub mod status;
