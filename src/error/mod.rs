//! Error types for the flight operations service.
//!
//! `AppError` is the top-level error returned by services. It wraps the domain errors
//! raised by the schedule generator and lifecycle rules, reference data validation
//! errors, configuration errors raised at startup, and infrastructure errors from the
//! database and scheduler.

pub mod config;
pub mod flight;
pub mod internal;
pub mod reference;

use thiserror::Error;

use crate::error::{
    config::ConfigError, flight::FlightError, internal::InternalError, reference::ReferenceError,
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. The message-carrying variants
/// describe outcomes a caller is expected to handle (missing records, uniqueness and
/// version conflicts).
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Schedule generation or lifecycle rule violation.
    #[error(transparent)]
    FlightErr(#[from] FlightError),

    /// Invalid airline, aircraft or station field.
    #[error(transparent)]
    ReferenceErr(#[from] ReferenceError),

    /// Unexpected internal state, usually a corrupt persisted value.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Event payload serialization error.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness rule would be violated, such as a second active flight with the
    /// same flight number.
    ///
    /// # Fields
    /// - Message describing the conflicting record
    #[error("{0}")]
    Conflict(String),

    /// The record changed since it was read.
    ///
    /// Raised by optimistic locking when the stored version no longer matches the
    /// version the caller read.
    #[error("Record {id} was modified concurrently (expected version {expected})")]
    StaleVersion {
        /// Primary key of the record
        id: i32,
        /// Version the caller expected to overwrite
        expected: i64,
    },

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Maps the error of a version-checked write.
    ///
    /// `DbErr::RecordNotUpdated` means no row matched both the ID and the expected
    /// version, which is reported as `StaleVersion`. Other errors convert as usual.
    pub fn from_versioned_write(err: sea_orm::DbErr, id: i32, expected: i64) -> Self {
        match err {
            sea_orm::DbErr::RecordNotUpdated => AppError::StaleVersion { id, expected },
            other => AppError::DbErr(other),
        }
    }

    /// Maps the error of a write guarded by a unique index.
    ///
    /// A unique constraint violation is reported as `Conflict` with the message built
    /// by `message`. Other errors convert as usual.
    pub fn from_unique_write(err: sea_orm::DbErr, message: impl FnOnce() -> String) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message()),
            _ => AppError::DbErr(err),
        }
    }
}
