#![allow(dead_code)]

//! Test infrastructure for relay-broker delivery tests

use relay_broker::{BrokerError, BrokerResult, RecordSource};
use relay_core::Record;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::sync::mpsc;

/// What a test feeds into the [`ChannelSource`].
#[derive(Debug)]
pub enum Feed {
    Record(Record),
    Error(String),
}

/// In-memory stand-in for the Kafka consumer.
///
/// Closes (returns `BrokerError::Closed`) once every sender is dropped.
pub struct ChannelSource {
    rx: mpsc::UnboundedReceiver<Feed>,
}

impl ChannelSource {
    pub fn new() -> (mpsc::UnboundedSender<Feed>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }
}

#[async_trait]
impl RecordSource for ChannelSource {
    async fn recv(&mut self) -> BrokerResult<Record> {
        match self.rx.recv().await {
            Some(Feed::Record(record)) => Ok(record),
            Some(Feed::Error(message)) => Err(BrokerError::Other {
                message,
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Err(BrokerError::Closed {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

pub fn json_record(json: &str) -> Feed {
    Feed::Record(Record::unkeyed(json.as_bytes().to_vec()))
}

pub fn raw_record(bytes: &[u8]) -> Feed {
    Feed::Record(Record::unkeyed(bytes.to_vec()))
}
