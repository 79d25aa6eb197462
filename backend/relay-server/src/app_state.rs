use relay_broker::{DeliveryStatus, Metrics, RecordPublisher};
use relay_config::SubscriberConfig;
use relay_core::DisplayBuffer;

use std::sync::Arc;

/// Shared state for the publisher's handlers
#[derive(Clone)]
pub struct PublisherState {
    pub publisher: Arc<dyn RecordPublisher>,
    pub metrics: Metrics,
}

impl PublisherState {
    pub fn new(publisher: Arc<dyn RecordPublisher>) -> Self {
        Self {
            publisher,
            metrics: Metrics::new(),
        }
    }
}

/// Shared state for the subscriber's handlers
#[derive(Clone)]
pub struct SubscriberState {
    pub buffer: DisplayBuffer,
    pub status: DeliveryStatus,
    pub topic: String,
    /// Viewer page auto-reload interval
    pub refresh_ms: u64,
}

impl SubscriberState {
    pub fn new(
        buffer: DisplayBuffer,
        status: DeliveryStatus,
        topic: impl Into<String>,
        config: &SubscriberConfig,
    ) -> Self {
        Self {
            buffer,
            status,
            topic: topic.into(),
            refresh_ms: config.refresh_ms(),
        }
    }
}
