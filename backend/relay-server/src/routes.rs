use crate::{PublisherState, SubscriberState, health, publish, publisher_page, viewer};

use axum::{
    Router,
    routing::{get, post},
};

/// Publisher service: entry form and publish endpoint
pub fn build_publisher_router(state: PublisherState) -> Router {
    Router::new()
        .route("/", get(publisher_page))
        .route("/publish", post(publish))
        // Health check endpoints
        .route("/health", get(health::publisher_health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::publisher_readiness))
        .with_state(state)
}

/// Subscriber service: viewer page
pub fn build_subscriber_router(state: SubscriberState) -> Router {
    Router::new()
        .route("/", get(viewer))
        // Health check endpoints
        .route("/health", get(health::subscriber_health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::subscriber_readiness))
        .with_state(state)
}
