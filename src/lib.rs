//! Flight operations backend.
//!
//! Turns recurring flight schedules into concrete flights and tracks each flight
//! through its operational lifecycle.
//!
//! # Architecture
//!
//! - **Model Layer** (`model/`) - Domain models, the schedule generator and the pure lifecycle rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Service Layer** (`service/`) - Orchestration of repositories, cache and events
//! - **Error Layer** (`error/`) - Application and domain error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared database pool, flight cache and event sink
//! - **Startup** (`startup`) - Tracing, database schema and event sink initialization
//! - **Events** (`event/`) - Domain event sinks (log, webhook, archive)
//! - **Cache** (`cache`) - Flight-number keyed flight cache
//! - **Scheduler** (`scheduler/`) - Cron jobs (event archive retention)

pub mod cache;
pub mod config;
pub mod data;
pub mod error;
pub mod event;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
