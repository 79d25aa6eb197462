#![allow(dead_code)]

//! Test infrastructure for relay-server API tests

use relay_broker::{
    BrokerError, BrokerResult, DeliveryReceipt, DeliveryStatus, RecordPublisher, RecordSource,
};
use relay_config::SubscriberConfig;
use relay_core::{DisplayBuffer, Record};
use relay_server::{PublisherState, SubscriberState};

use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response},
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use tokio::sync::mpsc;

pub const TEST_TOPIC: &str = "test-topic";

/// In-memory stand-in for the Kafka producer. Keeps every record it was
/// asked to send, and fails sends while `set_failing(true)`.
#[derive(Default)]
pub struct MemoryPublisher {
    sent: Mutex<Vec<Record>>,
    failing: AtomicBool,
}

impl MemoryPublisher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<Record> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordPublisher for MemoryPublisher {
    async fn publish(&self, record: Record) -> BrokerResult<DeliveryReceipt> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(BrokerError::Other {
                message: "broker unavailable".into(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(record);
        Ok(DeliveryReceipt {
            partition: 0,
            offset: sent.len() as i64 - 1,
        })
    }

    async fn flush(&self, _timeout: Duration) -> BrokerResult<()> {
        Ok(())
    }

    fn topic(&self) -> &str {
        TEST_TOPIC
    }
}

/// Channel-backed stand-in for the Kafka consumer. Closes once the sender drops.
pub struct ChannelSource {
    rx: mpsc::UnboundedReceiver<Record>,
}

impl ChannelSource {
    pub fn new() -> (mpsc::UnboundedSender<Record>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }
}

#[async_trait]
impl RecordSource for ChannelSource {
    async fn recv(&mut self) -> BrokerResult<Record> {
        self.rx.recv().await.ok_or_else(|| BrokerError::Closed {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

pub fn publisher_state(publisher: Arc<MemoryPublisher>) -> PublisherState {
    PublisherState::new(publisher)
}

pub fn subscriber_state(buffer: DisplayBuffer, status: DeliveryStatus) -> SubscriberState {
    SubscriberState::new(buffer, status, TEST_TOPIC, &SubscriberConfig::default())
}

/// Build a form-encoded `POST /publish`.
pub fn publish_request(form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/publish")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
