use std::sync::Arc;

use super::{DomainEvent, EventPublisher};

/// Forwards every event to each inner sink in order.
#[derive(Clone, Default)]
pub struct FanoutEventPublisher {
    sinks: Vec<Arc<dyn EventPublisher>>,
}

impl FanoutEventPublisher {
    pub fn new(sinks: Vec<Arc<dyn EventPublisher>>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: Arc<dyn EventPublisher>) {
        self.sinks.push(sink);
    }
}

impl EventPublisher for FanoutEventPublisher {
    fn publish(&self, event: DomainEvent) {
        for sink in &self.sinks {
            sink.publish(event.clone());
        }
    }
}
