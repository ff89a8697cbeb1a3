//! Flight Operations Test Utils
//!
//! Provides shared testing utilities for the flight operations crate. This crate offers a
//! builder for creating test contexts with in-memory SQLite databases, factories that insert
//! rows with sensible defaults, and fixtures that build entity models without a database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert reference data, flights, schedules, legs and archived events
//! - **fixture**: In-memory entity models with fixed defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_flight_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let flight = factory::create_flight(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
