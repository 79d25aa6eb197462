use crate::BrokerResult;

use std::time::Duration;

use async_trait::async_trait;
use relay_core::Record;

/// Where a record landed once the broker acknowledged it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub partition: i32,
    pub offset: i64,
}

/// Sends records to the fixed topic.
///
/// Implemented by [`crate::KafkaPublisher`]; handlers only see this trait.
#[async_trait]
pub trait RecordPublisher: Send + Sync {
    /// Send one record and wait for its delivery report.
    async fn publish(&self, record: Record) -> BrokerResult<DeliveryReceipt>;

    /// Wait for in-flight records, used on shutdown.
    async fn flush(&self, timeout: Duration) -> BrokerResult<()>;

    fn topic(&self) -> &str;
}
