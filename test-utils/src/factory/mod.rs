//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the
//! fields they care about. Each entity has its own module with a `Factory`
//! struct for customization and a `create_*` function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let schedule = factory::create_flight_schedule(&db).await?;
//!     let flight = factory::create_flight(&db).await?;
//!     let leg = factory::create_flight_leg(&db, flight.id, 1).await?;
//!
//!     // Flight with two consecutive legs
//!     let (flight, [first, second]) = factory::helpers::create_flight_with_legs(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let flight = factory::flight::FlightFactory::new(&db)
//!     .flight_number("TK2024")
//!     .passengers(Some(100), Some(80))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `airline` - Create airline entities
//! - `aircraft` - Create aircraft entities for an airline
//! - `station` - Create station entities
//! - `flight` - Create flight entities
//! - `flight_leg` - Create flight leg entities
//! - `flight_schedule` - Create recurring schedule entities
//! - `event_log` - Create archived event entities
//! - `helpers` - ID generation and entities with dependencies

pub mod aircraft;
pub mod airline;
pub mod event_log;
pub mod flight;
pub mod flight_leg;
pub mod flight_schedule;
pub mod helpers;
pub mod station;

pub use aircraft::create_aircraft;
pub use airline::create_airline;
pub use event_log::create_event_log;
pub use flight::create_flight;
pub use flight_leg::create_flight_leg;
pub use flight_schedule::create_flight_schedule;
pub use station::create_station;
