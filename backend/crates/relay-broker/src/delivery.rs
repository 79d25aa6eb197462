//! Background task feeding the viewer.
//!
//! Receives records from a [`RecordSource`], decodes each value into a
//! [`Payload`] and pushes its rendering onto the [`DisplayBuffer`].

use crate::{BrokerError, DeliveryStatus, Metrics, RecordSource, ShutdownGuard};

use relay_core::{DeliveryState, DisplayBuffer, Payload, Record};

use std::time::Duration;

use log::{debug, info, warn};

/// Pause after a receive error so a broken connection does not spin.
const ERROR_BACKOFF: Duration = Duration::from_millis(500);

pub struct DeliveryTask<S: RecordSource> {
    source: S,
    buffer: DisplayBuffer,
    status: DeliveryStatus,
    metrics: Metrics,
}

impl<S: RecordSource> DeliveryTask<S> {
    pub fn new(source: S, buffer: DisplayBuffer, status: DeliveryStatus, metrics: Metrics) -> Self {
        Self {
            source,
            buffer,
            status,
            metrics,
        }
    }

    /// Run until shutdown or until the source closes.
    pub async fn run(self, mut shutdown: ShutdownGuard) {
        let DeliveryTask {
            mut source,
            buffer,
            status,
            metrics,
        } = self;

        status.set(DeliveryState::Running);
        info!("Delivery task running");

        loop {
            tokio::select! {
                _ = shutdown.wait() => {
                    info!("Delivery task stopping on shutdown");
                    break;
                }
                received = source.recv() => match received {
                    Ok(record) => {
                        deliver(&record, &buffer, &metrics).await;
                    }
                    Err(BrokerError::Closed { .. }) => {
                        warn!("Record source closed, delivery task stopping");
                        break;
                    }
                    Err(e) => {
                        warn!("Receive error (client will reconnect): {}", e);
                        metrics.delivery_error();
                        tokio::time::sleep(ERROR_BACKOFF).await;
                    }
                }
            }
        }

        status.set(DeliveryState::Stopped);
    }
}

/// Decode, render and buffer one record. Never fails.
pub async fn deliver(record: &Record, buffer: &DisplayBuffer, metrics: &Metrics) -> Payload {
    let payload = Payload::decode(&record.value);
    let held = buffer.push(payload.render()).await;

    debug!(
        "Buffered {} record (key {}), {} held",
        payload.kind(),
        record.key_display(),
        held
    );

    metrics.record_delivered(payload.kind());
    metrics.buffer_entries(held);

    payload
}
