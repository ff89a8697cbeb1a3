//! Flight schedule factory for creating test schedule entities.
//!
//! Defaults come from `fixture::flight_schedule`, so tests that need the
//! same values without a database can use the fixture directly.

use crate::{factory::helpers::next_id, fixture};
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flight schedules with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flight_schedule::FlightScheduleFactory;
///
/// let schedule = FlightScheduleFactory::new(&db)
///     .operating_days(Some("MONDAY,FRIDAY"))
///     .build()
///     .await?;
/// ```
pub struct FlightScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    flight_number: String,
    departure_time: NaiveTime,
    arrival_time: NaiveTime,
    operating_days: Option<String>,
    effective_from: NaiveDate,
    effective_to: NaiveDate,
    passenger_capacity: Option<i32>,
    active: bool,
}

impl<'a> FlightScheduleFactory<'a> {
    /// Creates a new FlightScheduleFactory with default values.
    ///
    /// Defaults:
    /// - flight_number: `"TK{id}"` where id is auto-incremented
    /// - times, route, window and capacity from `fixture::flight_schedule`
    /// - operating_days: `None` (daily)
    /// - active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `FlightScheduleFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let defaults = fixture::flight_schedule::entity();
        Self {
            db,
            flight_number: format!("TK{}", next_id()),
            departure_time: defaults.departure_time,
            arrival_time: defaults.arrival_time,
            operating_days: defaults.operating_days,
            effective_from: defaults.effective_from,
            effective_to: defaults.effective_to,
            passenger_capacity: defaults.passenger_capacity,
            active: defaults.active,
        }
    }

    pub fn flight_number(mut self, flight_number: impl Into<String>) -> Self {
        self.flight_number = flight_number.into();
        self
    }

    pub fn times(mut self, departure: NaiveTime, arrival: NaiveTime) -> Self {
        self.departure_time = departure;
        self.arrival_time = arrival;
        self
    }

    /// Sets the raw operating days column, e.g. `Some("MONDAY,WEDNESDAY")`.
    pub fn operating_days(mut self, operating_days: Option<&str>) -> Self {
        self.operating_days = operating_days.map(str::to_string);
        self
    }

    pub fn effective(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.effective_from = from;
        self.effective_to = to;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the schedule entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flight_schedule::Model)` - Created schedule entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flight_schedule::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::flight_schedule::ActiveModel {
            id: ActiveValue::NotSet,
            flight_number: ActiveValue::Set(self.flight_number),
            airline_code: ActiveValue::Set(fixture::flight_schedule::DEFAULT_AIRLINE_CODE.to_string()),
            aircraft_registration: ActiveValue::Set(None),
            departure_station_code: ActiveValue::Set(
                fixture::flight_schedule::DEFAULT_DEPARTURE_STATION.to_string(),
            ),
            arrival_station_code: ActiveValue::Set(
                fixture::flight_schedule::DEFAULT_ARRIVAL_STATION.to_string(),
            ),
            departure_time: ActiveValue::Set(self.departure_time),
            arrival_time: ActiveValue::Set(self.arrival_time),
            flight_type: ActiveValue::Set(fixture::flight_schedule::DEFAULT_FLIGHT_TYPE.to_string()),
            operating_days: ActiveValue::Set(self.operating_days),
            effective_from: ActiveValue::Set(self.effective_from),
            effective_to: ActiveValue::Set(self.effective_to),
            duration_minutes: ActiveValue::Set(None),
            distance_km: ActiveValue::Set(None),
            passenger_capacity: ActiveValue::Set(self.passenger_capacity),
            terminal: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            active: ActiveValue::Set(self.active),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active daily schedule with default values.
///
/// # Returns
/// - `Ok(entity::flight_schedule::Model)` - Created schedule entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_flight_schedule(
    db: &DatabaseConnection,
) -> Result<entity::flight_schedule::Model, DbErr> {
    FlightScheduleFactory::new(db).build().await
}
