use crate::BrokerResult;

use async_trait::async_trait;
use relay_core::Record;

/// Stream of records delivered from the subscribed topic.
#[async_trait]
pub trait RecordSource: Send {
    /// Wait for the next record.
    ///
    /// Returns [`crate::BrokerError::Closed`] once no more records can
    /// arrive; other errors are transient.
    async fn recv(&mut self) -> BrokerResult<Record>;
}
