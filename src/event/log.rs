use tracing::info;

use super::{DomainEvent, EventPublisher};

/// Writes each event to the tracing log. Used when no other sink is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventPublisher;

impl EventPublisher for LogEventPublisher {
    fn publish(&self, event: DomainEvent) {
        info!(
            event_type = event.event_type.as_str(),
            entity_type = event.entity_type.as_str(),
            key = %event.key,
            "Published {} event for {}",
            event.event_type,
            event.key
        );
    }
}
