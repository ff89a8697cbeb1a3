//! Archived domain events.

use chrono::NaiveDateTime;
use serde::Serialize;

/// A domain event persisted to the event archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventLog {
    pub id: i32,
    /// Upper-case event kind (e.g. `DELAYED`).
    pub event_type: String,
    /// Service that published the event.
    pub source_service: String,
    /// Kind of entity the event is about (e.g. `FLIGHT`).
    pub entity_type: String,
    /// Business key of the entity, such as the flight number.
    pub entity_id: String,
    /// When the event occurred.
    pub event_timestamp: NaiveDateTime,
    /// JSON payload as published.
    pub event_data: Option<String>,
    pub correlation_id: Option<String>,
    pub user_id: Option<String>,
    /// When the event was written to the archive.
    pub archived_at: NaiveDateTime,
}

impl EventLog {
    pub fn from_entity(entity: entity::event_log::Model) -> Self {
        Self {
            id: entity.id,
            event_type: entity.event_type,
            source_service: entity.source_service,
            entity_type: entity.entity_type,
            entity_id: entity.entity_id,
            event_timestamp: entity.event_timestamp,
            event_data: entity.event_data,
            correlation_id: entity.correlation_id,
            user_id: entity.user_id,
            archived_at: entity.archived_at,
        }
    }
}

/// Parameters for archiving an event.
#[derive(Debug, Clone)]
pub struct CreateEventLogParams {
    pub event_type: String,
    pub source_service: String,
    pub entity_type: String,
    pub entity_id: String,
    pub event_timestamp: NaiveDateTime,
    pub event_data: Option<String>,
    pub correlation_id: Option<String>,
    pub user_id: Option<String>,
}
