use std::sync::{Arc, Mutex};

use super::{DomainEvent, EventPublisher};

/// Keeps published events in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every event published so far, oldest first.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Removes and returns every buffered event.
    pub fn drain(&self) -> Vec<DomainEvent> {
        std::mem::take(
            &mut *self
                .events
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }
}

impl EventPublisher for MemoryEventPublisher {
    fn publish(&self, event: DomainEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}
