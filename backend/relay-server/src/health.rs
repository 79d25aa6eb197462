use crate::{PublisherState, SubscriberState};

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health (publisher)
pub async fn publisher_health(State(state): State<PublisherState>) -> Response {
    let health = json!({
        "status": "healthy",
        "service": "publisher",
        "version": env!("CARGO_PKG_VERSION"),
        "topic": state.publisher.topic(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /health (subscriber), with delivery state and buffer fill
pub async fn subscriber_health(State(state): State<SubscriberState>) -> Response {
    let delivery = state.status.current();
    let status = if delivery.is_running() {
        "healthy"
    } else {
        "degraded"
    };
    let health = json!({
        "status": status,
        "service": "subscriber",
        "version": env!("CARGO_PKG_VERSION"),
        "topic": state.topic,
        "delivery": delivery,
        "buffered": state.buffer.len().await,
        "retention": state.buffer.capacity(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - the process answers, so it is alive
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready (publisher) - the producer exists once the router is built
pub async fn publisher_readiness() -> Response {
    (StatusCode::OK, "Ready").into_response()
}

/// GET /ready (subscriber) - ready once the delivery task is consuming
pub async fn subscriber_readiness(State(state): State<SubscriberState>) -> Response {
    let delivery = state.status.current();
    if delivery.is_running() {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            format!("Not ready: delivery {}", delivery.as_str()),
        )
            .into_response()
    }
}
