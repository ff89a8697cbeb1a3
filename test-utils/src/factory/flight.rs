//! Flight factory for creating test flight entities.
//!
//! This module provides factory methods for creating flight entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::{june, next_id};
use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flight::FlightFactory;
///
/// let flight = FlightFactory::new(&db)
///     .flight_number("TK1")
///     .status("DELAYED")
///     .build()
///     .await?;
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    flight_number: String,
    airline_code: String,
    departure_station_code: String,
    arrival_station_code: String,
    scheduled_departure_time: NaiveDateTime,
    scheduled_arrival_time: NaiveDateTime,
    status: String,
    flight_type: String,
    passenger_capacity: Option<i32>,
    booked_passengers: Option<i32>,
    active: bool,
    version: i64,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - flight_number: `"TK{id}"` where id is auto-incremented
    /// - airline_code: `"TK"`
    /// - route: IST -> ESB
    /// - scheduled: 2024-06-01 09:00 -> 11:30
    /// - status: `"SCHEDULED"`, flight_type: `"DOMESTIC"`
    /// - passenger_capacity: `Some(180)`, booked_passengers: `None`
    /// - active: `true`, version: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `FlightFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            flight_number: format!("TK{}", id),
            airline_code: "TK".to_string(),
            departure_station_code: "IST".to_string(),
            arrival_station_code: "ESB".to_string(),
            scheduled_departure_time: june(1, 9, 0),
            scheduled_arrival_time: june(1, 11, 30),
            status: "SCHEDULED".to_string(),
            flight_type: "DOMESTIC".to_string(),
            passenger_capacity: Some(180),
            booked_passengers: None,
            active: true,
            version: 0,
        }
    }

    pub fn flight_number(mut self, flight_number: impl Into<String>) -> Self {
        self.flight_number = flight_number.into();
        self
    }

    pub fn stations(mut self, departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        self.departure_station_code = departure.into();
        self.arrival_station_code = arrival.into();
        self
    }

    /// Sets the scheduled departure and arrival. The flight date follows the departure.
    pub fn scheduled(mut self, departure: NaiveDateTime, arrival: NaiveDateTime) -> Self {
        self.scheduled_departure_time = departure;
        self.scheduled_arrival_time = arrival;
        self
    }

    /// Sets the raw status column, which allows writing unknown values.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn flight_type(mut self, flight_type: impl Into<String>) -> Self {
        self.flight_type = flight_type.into();
        self
    }

    pub fn passengers(mut self, capacity: Option<i32>, booked: Option<i32>) -> Self {
        self.passenger_capacity = capacity;
        self.booked_passengers = booked;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn version(mut self, version: i64) -> Self {
        self.version = version;
        self
    }

    /// Builds and inserts the flight entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flight::Model)` - Created flight entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::flight::ActiveModel {
            id: ActiveValue::NotSet,
            flight_number: ActiveValue::Set(self.flight_number),
            airline_code: ActiveValue::Set(self.airline_code),
            aircraft_registration: ActiveValue::Set(None),
            departure_station_code: ActiveValue::Set(self.departure_station_code),
            arrival_station_code: ActiveValue::Set(self.arrival_station_code),
            flight_date: ActiveValue::Set(self.scheduled_departure_time),
            scheduled_departure_time: ActiveValue::Set(self.scheduled_departure_time),
            scheduled_arrival_time: ActiveValue::Set(self.scheduled_arrival_time),
            actual_departure_time: ActiveValue::Set(None),
            actual_arrival_time: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            flight_type: ActiveValue::Set(self.flight_type),
            gate: ActiveValue::Set(None),
            terminal: ActiveValue::Set(None),
            delay_minutes: ActiveValue::Set(None),
            duration_minutes: ActiveValue::Set(None),
            distance_km: ActiveValue::Set(None),
            passenger_capacity: ActiveValue::Set(self.passenger_capacity),
            booked_passengers: ActiveValue::Set(self.booked_passengers),
            description: ActiveValue::Set(None),
            active: ActiveValue::Set(self.active),
            version: ActiveValue::Set(self.version),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active, scheduled flight with default values.
///
/// Shorthand for `FlightFactory::new(db).build().await`.
///
/// # Returns
/// - `Ok(entity::flight::Model)` - Created flight entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_flight(db: &DatabaseConnection) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db).build().await
}
