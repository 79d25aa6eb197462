use relay_core::DeliveryState;

use std::sync::Arc;

use tokio::sync::watch;

/// Shared view of the delivery task's [`DeliveryState`].
///
/// The task writes it, health endpoints read it.
#[derive(Clone)]
pub struct DeliveryStatus {
    state_tx: Arc<watch::Sender<DeliveryState>>,
}

impl DeliveryStatus {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(DeliveryState::NotStarted);
        Self {
            state_tx: Arc::new(state_tx),
        }
    }

    pub fn set(&self, state: DeliveryState) {
        let previous = self.state_tx.send_replace(state);
        if previous != state {
            log::info!(
                "Delivery state: {} -> {}",
                previous.as_str(),
                state.as_str()
            );
        }
    }

    pub fn current(&self) -> DeliveryState {
        *self.state_tx.borrow()
    }

    /// Receiver for waiting on state changes.
    pub fn subscribe(&self) -> watch::Receiver<DeliveryState> {
        self.state_tx.subscribe()
    }
}

impl Default for DeliveryStatus {
    fn default() -> Self {
        Self::new()
    }
}
