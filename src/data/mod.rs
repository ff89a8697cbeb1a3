//! Database repository layer.
//!
//! One repository per table. Repositories use SeaORM entity models internally and
//! return domain models, converting persisted enum strings at the boundary. Updates to
//! versioned rows are conditional on the version the caller read and fail with
//! `DbErr::RecordNotUpdated` when it has moved on.

pub mod aircraft;
pub mod airline;
pub mod event_log;
pub mod flight;
pub mod flight_leg;
pub mod flight_schedule;
pub mod station;
