//! Event log factory for creating archived event rows.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating archived events with customizable fields.
///
/// Defaults to a `FLIGHT_CREATED` event for flight `"1"` stamped at the current UTC time.
pub struct EventLogFactory<'a> {
    db: &'a DatabaseConnection,
    event_type: String,
    entity_type: String,
    entity_id: String,
    event_timestamp: NaiveDateTime,
    correlation_id: Option<String>,
}

impl<'a> EventLogFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            event_type: "FLIGHT_CREATED".to_string(),
            entity_type: "FLIGHT".to_string(),
            entity_id: "1".to_string(),
            event_timestamp: Utc::now().naive_utc(),
            correlation_id: None,
        }
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Sets the entity type and key the event refers to.
    pub fn entity(mut self, entity_type: impl Into<String>, entity_id: impl Into<String>) -> Self {
        self.entity_type = entity_type.into();
        self.entity_id = entity_id.into();
        self
    }

    pub fn event_timestamp(mut self, event_timestamp: NaiveDateTime) -> Self {
        self.event_timestamp = event_timestamp;
        self
    }

    pub fn correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Builds and inserts the event row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event_log::Model)` - Created event row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event_log::Model, DbErr> {
        entity::event_log::ActiveModel {
            id: ActiveValue::NotSet,
            event_type: ActiveValue::Set(self.event_type),
            source_service: ActiveValue::Set("flight-service".to_string()),
            entity_type: ActiveValue::Set(self.entity_type),
            entity_id: ActiveValue::Set(self.entity_id),
            event_timestamp: ActiveValue::Set(self.event_timestamp),
            event_data: ActiveValue::Set(None),
            correlation_id: ActiveValue::Set(self.correlation_id),
            user_id: ActiveValue::Set(None),
            archived_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an archived event with default values.
pub async fn create_event_log(db: &DatabaseConnection) -> Result<entity::event_log::Model, DbErr> {
    EventLogFactory::new(db).build().await
}
