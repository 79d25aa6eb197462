use crate::{BrokerError, BrokerResult, DeliveryReceipt, RecordPublisher, producer_config};

use relay_config::BrokerConfig;
use relay_core::Record;

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};

/// [`RecordPublisher`] backed by one long-lived `FutureProducer`.
pub struct KafkaPublisher {
    producer: FutureProducer,
    topic: String,
    queue_timeout: Duration,
}

impl KafkaPublisher {
    #[track_caller]
    pub fn new(config: &BrokerConfig) -> BrokerResult<Self> {
        let producer: FutureProducer =
            producer_config(config)
                .create()
                .map_err(|source| BrokerError::ClientCreation {
                    source,
                    location: ErrorLocation::from(Location::caller()),
                })?;

        Ok(Self {
            producer,
            topic: config.topic.clone(),
            queue_timeout: Duration::from_millis(config.message_timeout_ms),
        })
    }
}

#[async_trait]
impl RecordPublisher for KafkaPublisher {
    async fn publish(&self, record: Record) -> BrokerResult<DeliveryReceipt> {
        let mut outgoing = FutureRecord::<[u8], [u8]>::to(&self.topic).payload(&record.value[..]);
        if let Some(key) = record.key.as_deref() {
            outgoing = outgoing.key(key);
        }

        match self.producer.send(outgoing, self.queue_timeout).await {
            Ok((partition, offset)) => {
                debug!(
                    "Delivered to {} [partition {}] at offset {} (key {})",
                    self.topic,
                    partition,
                    offset,
                    record.key_display()
                );
                Ok(DeliveryReceipt { partition, offset })
            }
            Err((source, _message)) => Err(BrokerError::Delivery {
                source,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    async fn flush(&self, timeout: Duration) -> BrokerResult<()> {
        self.producer
            .flush(timeout)
            .map_err(|source| BrokerError::Flush {
                source,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    fn topic(&self) -> &str {
        &self.topic
    }
}
