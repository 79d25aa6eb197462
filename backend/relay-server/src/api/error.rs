//! Publish API errors
//!
//! Every failure is reported in-band: HTTP 200 with an `{"error": ...}`
//! body, whether the input was bad or the broker was unavailable.

use relay_broker::BrokerError;
use relay_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Required field missing or unusable
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Message body is not JSON
    #[error("Invalid JSON: {message} {location}")]
    InvalidJson {
        message: String,
        location: ErrorLocation,
    },

    /// Request body could not be read as a form
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Broker send failed
    #[error("Broker error: {message} {location}")]
    Broker {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Text returned to the caller.
    pub fn client_message(&self) -> &str {
        match self {
            ApiError::Validation { message, .. }
            | ApiError::InvalidJson { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::Broker { message, .. }
            | ApiError::Internal { message, .. } => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Broker { .. } | ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let body = ApiErrorResponse {
            error: self.client_message().to_string(),
        };

        (StatusCode::OK, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidJson { source, .. } => ApiError::InvalidJson {
                message: source.to_string(),
                location,
            },
            CoreError::Encode { source, .. } => ApiError::Internal {
                message: format!("Failed to encode message: {source}"),
                location,
            },
        }
    }
}

impl From<BrokerError> for ApiError {
    #[track_caller]
    fn from(e: BrokerError) -> Self {
        ApiError::Broker {
            message: e.client_message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<FormRejection> for ApiError {
    #[track_caller]
    fn from(rejection: FormRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
