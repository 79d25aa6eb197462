use crate::{BrokerError, BrokerResult, RecordSource, consumer_config};

use relay_config::BrokerConfig;
use relay_core::Record;

use std::panic::Location;

use async_trait::async_trait;
use bytes::Bytes;
use error_location::ErrorLocation;
use log::{debug, info};
use rdkafka::Message;
use rdkafka::consumer::{Consumer, StreamConsumer};

/// [`RecordSource`] backed by a `StreamConsumer` subscribed to one topic.
///
/// Reconnects and group rebalances are handled by librdkafka.
pub struct KafkaSubscriber {
    consumer: StreamConsumer,
}

impl KafkaSubscriber {
    /// Create the consumer and subscribe it to the configured topic.
    #[track_caller]
    pub fn connect(config: &BrokerConfig) -> BrokerResult<Self> {
        let consumer: StreamConsumer =
            consumer_config(config)
                .create()
                .map_err(|source| BrokerError::ClientCreation {
                    source,
                    location: ErrorLocation::from(Location::caller()),
                })?;

        consumer
            .subscribe(&[config.topic.as_str()])
            .map_err(|source| BrokerError::Subscribe {
                topic: config.topic.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(
            "Subscribed to topic '{}' as group '{}'",
            config.topic, config.group_id
        );

        Ok(Self { consumer })
    }
}

#[async_trait]
impl RecordSource for KafkaSubscriber {
    async fn recv(&mut self) -> BrokerResult<Record> {
        let message = self
            .consumer
            .recv()
            .await
            .map_err(|source| BrokerError::Receive {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(
            "Received from {} [partition {}] at offset {}",
            message.topic(),
            message.partition(),
            message.offset()
        );

        Ok(Record::new(
            message.key().map(Bytes::copy_from_slice),
            message
                .payload()
                .map(Bytes::copy_from_slice)
                .unwrap_or_default(),
        ))
    }
}
