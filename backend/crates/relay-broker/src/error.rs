use std::result::Result as StdResult;

use error_location::ErrorLocation;
use rdkafka::error::KafkaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrokerError {
    #[error("Kafka client creation failed: {source} {location}")]
    ClientCreation {
        #[source]
        source: KafkaError,
        location: ErrorLocation,
    },

    #[error("Subscribe to topic '{topic}' failed: {source} {location}")]
    Subscribe {
        topic: String,
        #[source]
        source: KafkaError,
        location: ErrorLocation,
    },

    #[error("Delivery failed: {source} {location}")]
    Delivery {
        #[source]
        source: KafkaError,
        location: ErrorLocation,
    },

    #[error("Receive failed: {source} {location}")]
    Receive {
        #[source]
        source: KafkaError,
        location: ErrorLocation,
    },

    #[error("Flush failed: {source} {location}")]
    Flush {
        #[source]
        source: KafkaError,
        location: ErrorLocation,
    },

    #[error("Record source closed {location}")]
    Closed { location: ErrorLocation },

    #[error("Broker error: {message} {location}")]
    Other {
        message: String,
        location: ErrorLocation,
    },
}

impl BrokerError {
    /// Message suitable for an API response (no source location).
    pub fn client_message(&self) -> String {
        match self {
            BrokerError::ClientCreation { source, .. }
            | BrokerError::Delivery { source, .. }
            | BrokerError::Receive { source, .. }
            | BrokerError::Flush { source, .. } => source.to_string(),
            BrokerError::Subscribe { topic, source, .. } => format!("{topic}: {source}"),
            BrokerError::Closed { .. } => String::from("record source closed"),
            BrokerError::Other { message, .. } => message.clone(),
        }
    }
}

pub type Result<T> = StdResult<T, BrokerError>;
