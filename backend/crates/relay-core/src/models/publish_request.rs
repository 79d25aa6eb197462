use crate::{CoreError, CoreResult, Record};

use std::panic::Location;

use bytes::Bytes;
use error_location::ErrorLocation;
use serde_json::Value;

/// A validated publish request: the message already decoded as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishRequest {
    pub key: String,
    pub message: Value,
}

impl PublishRequest {
    /// Validate raw form input.
    ///
    /// `message` is required and must be JSON; `key` defaults to empty.
    #[track_caller]
    pub fn parse(key: Option<&str>, message: Option<&str>) -> CoreResult<Self> {
        let message = message.ok_or_else(|| CoreError::Validation {
            message: String::from("message field is required"),
            field: Some(String::from("message")),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let message: Value =
            serde_json::from_str(message).map_err(|source| CoreError::InvalidJson {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            key: key.unwrap_or_default().to_string(),
            message,
        })
    }

    /// Empty key means no key at all.
    pub fn record_key(&self) -> Option<Bytes> {
        if self.key.is_empty() {
            None
        } else {
            Some(Bytes::copy_from_slice(self.key.as_bytes()))
        }
    }

    /// Compact re-encoding of the message, whitespace normalized.
    #[track_caller]
    pub fn canonical_value(&self) -> CoreResult<Bytes> {
        serde_json::to_vec(&self.message)
            .map(Bytes::from)
            .map_err(|source| CoreError::Encode {
                source,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    pub fn to_record(&self) -> CoreResult<Record> {
        Ok(Record::new(self.record_key(), self.canonical_value()?))
    }
}
