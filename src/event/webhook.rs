use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, error, warn};

use super::{DomainEvent, EventPublisher};

/// Header carrying the event's business key.
pub const EVENT_KEY_HEADER: &str = "X-Event-Key";

/// POSTs each event as JSON to a configured URL.
///
/// Delivery happens on a spawned task. Failed deliveries are logged and dropped.
#[derive(Clone)]
pub struct WebhookEventPublisher {
    http_client: reqwest::Client,
    url: String,
}

impl WebhookEventPublisher {
    pub fn new(http_client: reqwest::Client, url: String) -> Self {
        Self { http_client, url }
    }

    /// Sends one event and waits for the response.
    ///
    /// # Returns
    /// - `Ok(())` - The endpoint answered with a success status
    /// - `Err(reqwest::Error)` - Connection failure or non-success status
    pub async fn deliver(&self, event: &DomainEvent) -> Result<(), reqwest::Error> {
        self.http_client
            .post(&self.url)
            .header(EVENT_KEY_HEADER, &event.key)
            .json(event)
            .send()
            .await?
            .error_for_status()?;

        debug!("Delivered {} event for {} to webhook", event.event_type, event.key);

        Ok(())
    }
}

impl EventPublisher for WebhookEventPublisher {
    fn publish(&self, event: DomainEvent) {
        self.spawn_delivery(event);
    }
}

impl WebhookEventPublisher {
    /// Starts delivery on the current runtime.
    ///
    /// # Returns
    /// - `Some(JoinHandle)` - Delivery task, already running
    /// - `None` - No runtime available; the event was dropped
    pub fn spawn_delivery(&self, event: DomainEvent) -> Option<JoinHandle<()>> {
        let Ok(handle) = Handle::try_current() else {
            warn!(
                "No async runtime available, dropping {} event for {}",
                event.event_type, event.key
            );
            return None;
        };

        let publisher = self.clone();
        Some(handle.spawn(async move {
            if let Err(e) = publisher.deliver(&event).await {
                error!(
                    "Failed to deliver {} event for {} to webhook: {}",
                    event.event_type, event.key, e
                );
            }
        }))
    }
}
