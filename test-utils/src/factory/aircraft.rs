//! Aircraft factory for creating test aircraft entities.
//!
//! Aircraft require an airline; `create_aircraft` takes the airline ID so the
//! caller controls the fleet it lands in.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test aircraft with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::aircraft::AircraftFactory;
///
/// let aircraft = AircraftFactory::new(&db, airline.id)
///     .registration("TC-JFK")
///     .build()
///     .await?;
/// ```
pub struct AircraftFactory<'a> {
    db: &'a DatabaseConnection,
    airline_id: i32,
    registration: String,
    aircraft_type: String,
    capacity: Option<i32>,
    active: bool,
}

impl<'a> AircraftFactory<'a> {
    /// Creates a new AircraftFactory with default values.
    ///
    /// Defaults:
    /// - registration: `"TC-{id}"` where id is auto-incremented
    /// - aircraft_type: `"A320"`
    /// - capacity: `Some(180)`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection, airline_id: i32) -> Self {
        Self {
            db,
            airline_id,
            registration: format!("TC-{:03}", next_id()),
            aircraft_type: "A320".to_string(),
            capacity: Some(180),
            active: true,
        }
    }

    pub fn registration(mut self, registration: impl Into<String>) -> Self {
        self.registration = registration.into();
        self
    }

    pub fn aircraft_type(mut self, aircraft_type: impl Into<String>) -> Self {
        self.aircraft_type = aircraft_type.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the aircraft entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::aircraft::Model)` - Created aircraft entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::aircraft::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::aircraft::ActiveModel {
            id: ActiveValue::NotSet,
            registration: ActiveValue::Set(self.registration),
            aircraft_type: ActiveValue::Set(self.aircraft_type),
            model: ActiveValue::Set(None),
            manufacturer: ActiveValue::Set(Some("Airbus".to_string())),
            capacity: ActiveValue::Set(self.capacity),
            max_range: ActiveValue::Set(None),
            cruise_speed: ActiveValue::Set(None),
            airline_id: ActiveValue::Set(self.airline_id),
            active: ActiveValue::Set(self.active),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active aircraft for `airline_id` with default values.
pub async fn create_aircraft(
    db: &DatabaseConnection,
    airline_id: i32,
) -> Result<entity::aircraft::Model, DbErr> {
    AircraftFactory::new(db, airline_id).build().await
}
