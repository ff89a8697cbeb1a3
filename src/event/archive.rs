use sea_orm::{DatabaseConnection, DbErr};
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{error, warn};

use super::{DomainEvent, EventPublisher};
use crate::{
    data::event_log::EventLogRepository,
    model::event_log::{CreateEventLogParams, EventLog},
};

/// Persists each event to the `event_log` table.
#[derive(Clone)]
pub struct ArchiveEventPublisher {
    db: DatabaseConnection,
}

impl ArchiveEventPublisher {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes one event to the archive and waits for the insert.
    pub async fn archive(&self, event: &DomainEvent) -> Result<EventLog, DbErr> {
        EventLogRepository::new(&self.db)
            .create(CreateEventLogParams {
                event_type: event.event_type.as_str().to_string(),
                source_service: event.source_service.to_string(),
                entity_type: event.entity_type.as_str().to_string(),
                entity_id: event.key.clone(),
                event_timestamp: event.timestamp,
                event_data: Some(event.payload.to_string()),
                correlation_id: event.correlation_id.clone(),
                user_id: None,
            })
            .await
    }
}

impl EventPublisher for ArchiveEventPublisher {
    fn publish(&self, event: DomainEvent) {
        self.spawn_archive(event);
    }
}

impl ArchiveEventPublisher {
    /// Starts archiving on the current runtime.
    ///
    /// # Returns
    /// - `Some(JoinHandle)` - Insert task, already running
    /// - `None` - No runtime available; the event was not archived
    pub fn spawn_archive(&self, event: DomainEvent) -> Option<JoinHandle<()>> {
        let Ok(handle) = Handle::try_current() else {
            warn!(
                "No async runtime available, not archiving {} event for {}",
                event.event_type, event.key
            );
            return None;
        };

        let publisher = self.clone();
        Some(handle.spawn(async move {
            if let Err(e) = publisher.archive(&event).await {
                error!(
                    "Failed to archive {} event for {}: {}",
                    event.event_type, event.key, e
                );
            }
        }))
    }
}
