//! Station factory for creating test station entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::station::StationFactory;
///
/// let station = StationFactory::new(&db)
///     .code("ESB")
///     .country("Turkey")
///     .build()
///     .await?;
/// ```
pub struct StationFactory<'a> {
    db: &'a DatabaseConnection,
    station_code: String,
    station_name: String,
    country: Option<String>,
    active: bool,
}

impl<'a> StationFactory<'a> {
    /// Creates a new StationFactory with default values.
    ///
    /// Defaults:
    /// - station_code: `"S{id}"` where id is auto-incremented
    /// - station_name: `"Station {id}"`
    /// - country: `Some("Turkey")`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            station_code: format!("S{}", id),
            station_name: format!("Station {}", id),
            country: Some("Turkey".to_string()),
            active: true,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.station_code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.station_name = name.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the station entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::station::Model)` - Created station entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::station::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::station::ActiveModel {
            id: ActiveValue::NotSet,
            station_code: ActiveValue::Set(self.station_code),
            station_name: ActiveValue::Set(self.station_name),
            city: ActiveValue::Set(None),
            country: ActiveValue::Set(self.country),
            address: ActiveValue::Set(None),
            timezone: ActiveValue::Set(Some("Europe/Istanbul".to_string())),
            latitude: ActiveValue::Set(None),
            longitude: ActiveValue::Set(None),
            altitude: ActiveValue::Set(None),
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

/// Creates an active station with default values.
pub async fn create_station(db: &DatabaseConnection) -> Result<entity::station::Model, DbErr> {
    StationFactory::new(db).build().await
}
