//! Domain event publishing.
//!
//! Services publish a `DomainEvent` after every successful write. Publishing is
//! fire-and-forget: `EventPublisher::publish` never fails and never blocks the caller.
//! Sinks that do I/O spawn a task and log delivery failures.

pub mod archive;
pub mod fanout;
pub mod log;
pub mod memory;
pub mod webhook;

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

pub use archive::ArchiveEventPublisher;
pub use fanout::FanoutEventPublisher;
pub use log::LogEventPublisher;
pub use memory::MemoryEventPublisher;
pub use webhook::WebhookEventPublisher;

/// Name this service stamps on every event it publishes.
pub const SOURCE_SERVICE: &str = "flight-service";

/// What happened to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Created,
    Updated,
    Deleted,
    StatusChanged,
    Delayed,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Created => "CREATED",
            EventKind::Updated => "UPDATED",
            EventKind::Deleted => "DELETED",
            EventKind::StatusChanged => "STATUS_CHANGED",
            EventKind::Delayed => "DELAYED",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of entity an event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Flight,
    FlightLeg,
    FlightSchedule,
    Airline,
    Aircraft,
    Station,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Flight => "FLIGHT",
            EntityType::FlightLeg => "FLIGHT_LEG",
            EntityType::FlightSchedule => "FLIGHT_SCHEDULE",
            EntityType::Airline => "AIRLINE",
            EntityType::Aircraft => "AIRCRAFT",
            EntityType::Station => "STATION",
        }
    }
}

/// A JSON event keyed by a business identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainEvent {
    pub event_type: EventKind,
    pub entity_type: EntityType,
    /// Business key: the flight number for flights, legs and schedules, the code for
    /// airlines and stations, the registration for aircraft.
    pub key: String,
    pub source_service: &'static str,
    pub timestamp: NaiveDateTime,
    /// Snapshot of the entity after the write.
    pub payload: serde_json::Value,
    pub correlation_id: Option<String>,
}

impl DomainEvent {
    /// Builds an event whose payload is the serialized entity.
    ///
    /// # Returns
    /// - `Ok(DomainEvent)` - Event stamped with the current UTC time
    /// - `Err(serde_json::Error)` - The entity could not be serialized
    pub fn new<T: Serialize>(
        event_type: EventKind,
        entity_type: EntityType,
        key: impl Into<String>,
        entity: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            event_type,
            entity_type,
            key: key.into(),
            source_service: SOURCE_SERVICE,
            timestamp: chrono::Utc::now().naive_utc(),
            payload: serde_json::to_value(entity)?,
            correlation_id: None,
        })
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }
}

/// A sink for domain events.
///
/// Implementations must not block; anything that performs I/O hands the event to a
/// spawned task.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: DomainEvent);
}
