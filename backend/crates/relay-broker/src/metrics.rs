use metrics::{counter, gauge};

/// Metrics collector for relay traffic
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "relay" }
    }

    /// Record acknowledged by the broker
    pub fn record_published(&self) {
        counter!(format!("{}.records.published", self.prefix)).increment(1);
    }

    /// Broker send failed
    pub fn publish_failed(&self) {
        counter!(format!("{}.records.publish_failed", self.prefix)).increment(1);
    }

    /// Publish request rejected before reaching the broker
    pub fn publish_rejected(&self) {
        counter!(format!("{}.records.rejected", self.prefix)).increment(1);
    }

    /// Record received by the subscriber, by payload kind
    pub fn record_delivered(&self, kind: &str) {
        counter!(format!("{}.records.delivered", self.prefix)).increment(1);
        counter!(format!("{}.records.delivered.{}", self.prefix, kind)).increment(1);
    }

    /// Receive error reported by the client
    pub fn delivery_error(&self) {
        counter!(format!("{}.delivery.errors", self.prefix)).increment(1);
    }

    /// Entries currently held by the viewer buffer
    pub fn buffer_entries(&self, count: usize) {
        gauge!(format!("{}.buffer.entries", self.prefix)).set(count as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
