use crate::ApiError;

use relay_broker::BrokerError;
use relay_core::{CoreError, PublishRequest};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn error_body(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_200_with_error_message() {
    let error = ApiError::Validation {
        message: "message field is required".into(),
        field: Some("message".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = error_body(error).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["error"], "message field is required");
    assert_eq!(json.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn given_broker_error_when_rendered_then_same_shape_as_bad_input() {
    let error = ApiError::Broker {
        message: "Message production error: MessageTimedOut".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = error_body(error).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["error"].as_str().unwrap().contains("MessageTimedOut"));
}

#[tokio::test]
async fn given_invalid_json_when_converted_then_message_has_no_source_location() {
    let core = PublishRequest::parse(None, Some("{bad json")).unwrap_err();
    assert!(matches!(core, CoreError::InvalidJson { .. }));

    let (status, json) = error_body(ApiError::from(core)).await;

    assert_eq!(status, StatusCode::OK);
    let message = json["error"].as_str().unwrap();
    assert!(!message.is_empty());
    assert!(!message.contains(".rs:"));
}

#[test]
fn given_missing_message_when_converted_then_validation_keeps_field() {
    let core = PublishRequest::parse(Some("k"), None).unwrap_err();

    let api = ApiError::from(core);

    match api {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("message")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_broker_error_when_converted_then_client_message_is_source_text() {
    let broker = BrokerError::Other {
        message: "broker unreachable".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api = ApiError::from(broker);

    assert_that!(api.client_message(), eq("broker unreachable"));
}
