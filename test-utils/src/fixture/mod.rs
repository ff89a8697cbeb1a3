//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build in-memory entity models for unit tests of domain conversion
//! and as default values for factories. Unlike factories, fixtures do NOT
//! insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let mut schedule = fixture::flight_schedule::entity();
//! schedule.operating_days = Some("MONDAY".to_string());
//! ```

pub mod flight;
pub mod flight_schedule;

pub use flight::entity as flight_entity;
pub use flight_schedule::entity as flight_schedule_entity;
