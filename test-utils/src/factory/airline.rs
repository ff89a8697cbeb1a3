//! Airline factory for creating test airline entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airlines with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::airline::AirlineFactory;
///
/// let airline = AirlineFactory::new(&db)
///     .code("PC")
///     .name("Pegasus Airlines")
///     .build()
///     .await?;
/// ```
pub struct AirlineFactory<'a> {
    db: &'a DatabaseConnection,
    airline_code: String,
    airline_name: String,
    active: bool,
}

impl<'a> AirlineFactory<'a> {
    /// Creates a new AirlineFactory with default values.
    ///
    /// Defaults:
    /// - airline_code: `"A{id}"` where id is auto-incremented
    /// - airline_name: `"Airline {id}"`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            airline_code: format!("A{}", id),
            airline_name: format!("Airline {}", id),
            active: true,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.airline_code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.airline_name = name.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the airline entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::airline::Model)` - Created airline entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::airline::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::airline::ActiveModel {
            id: ActiveValue::NotSet,
            airline_code: ActiveValue::Set(self.airline_code),
            airline_name: ActiveValue::Set(self.airline_name),
            description: ActiveValue::Set(None),
            country: ActiveValue::Set(Some("Turkey".to_string())),
            city: ActiveValue::Set(Some("Istanbul".to_string())),
            active: ActiveValue::Set(self.active),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active airline with default values.
pub async fn create_airline(db: &DatabaseConnection) -> Result<entity::airline::Model, DbErr> {
    AirlineFactory::new(db).build().await
}
