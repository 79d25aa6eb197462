use serde::Serialize;
use serde_json::Value;

pub const STATUS_SENT: &str = "sent";

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub status: &'static str,
    /// The decoded message echoed back
    pub message: Value,
}

impl PublishResponse {
    pub fn sent(message: Value) -> Self {
        Self {
            status: STATUS_SENT,
            message,
        }
    }
}
