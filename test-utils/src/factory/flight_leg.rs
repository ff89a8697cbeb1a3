//! Flight leg factory for creating test leg entities.

use crate::factory::helpers::june;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flight legs with customizable fields.
pub struct FlightLegFactory<'a> {
    db: &'a DatabaseConnection,
    flight_id: i32,
    leg_number: i32,
    departure_station_code: String,
    arrival_station_code: String,
    scheduled_departure_time: NaiveDateTime,
    scheduled_arrival_time: NaiveDateTime,
    status: String,
}

impl<'a> FlightLegFactory<'a> {
    /// Creates a new FlightLegFactory with default values.
    ///
    /// Defaults:
    /// - route: IST -> ESB
    /// - scheduled: 2024-06-01 09:00 -> 10:10
    /// - status: `"SCHEDULED"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `flight_id` - Flight the leg belongs to
    /// - `leg_number` - Position of the leg within the flight
    pub fn new(db: &'a DatabaseConnection, flight_id: i32, leg_number: i32) -> Self {
        Self {
            db,
            flight_id,
            leg_number,
            departure_station_code: "IST".to_string(),
            arrival_station_code: "ESB".to_string(),
            scheduled_departure_time: june(1, 9, 0),
            scheduled_arrival_time: june(1, 10, 10),
            status: "SCHEDULED".to_string(),
        }
    }

    pub fn stations(mut self, departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        self.departure_station_code = departure.into();
        self.arrival_station_code = arrival.into();
        self
    }

    pub fn scheduled(mut self, departure: NaiveDateTime, arrival: NaiveDateTime) -> Self {
        self.scheduled_departure_time = departure;
        self.scheduled_arrival_time = arrival;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the leg entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flight_leg::Model)` - Created leg entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flight_leg::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::flight_leg::ActiveModel {
            id: ActiveValue::NotSet,
            flight_id: ActiveValue::Set(self.flight_id),
            leg_number: ActiveValue::Set(self.leg_number),
            departure_station_code: ActiveValue::Set(self.departure_station_code),
            arrival_station_code: ActiveValue::Set(self.arrival_station_code),
            scheduled_departure_time: ActiveValue::Set(self.scheduled_departure_time),
            scheduled_arrival_time: ActiveValue::Set(self.scheduled_arrival_time),
            actual_departure_time: ActiveValue::Set(None),
            actual_arrival_time: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            gate: ActiveValue::Set(None),
            terminal: ActiveValue::Set(None),
            delay_minutes: ActiveValue::Set(None),
            duration_minutes: ActiveValue::Set(None),
            distance_km: ActiveValue::Set(None),
            ground_time_minutes: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled leg with default route and times.
pub async fn create_flight_leg(
    db: &DatabaseConnection,
    flight_id: i32,
    leg_number: i32,
) -> Result<entity::flight_leg::Model, DbErr> {
    FlightLegFactory::new(db, flight_id, leg_number).build().await
}
