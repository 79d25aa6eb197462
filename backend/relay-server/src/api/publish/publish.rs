//! Publish handler

use crate::{ApiResult, PublishForm, PublishResponse, PublisherState};

use relay_core::PublishRequest;

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};
use log::debug;

/// POST /publish
///
/// Validate the form's message as JSON and send it to the topic. Exactly
/// one broker send per valid request, none for an invalid one.
pub async fn publish(
    State(state): State<PublisherState>,
    form: Result<Form<PublishForm>, FormRejection>,
) -> ApiResult<Json<PublishResponse>> {
    let Form(form) = form.inspect_err(|_| state.metrics.publish_rejected())?;

    let request = PublishRequest::parse(form.key.as_deref(), form.message.as_deref())
        .inspect_err(|_| state.metrics.publish_rejected())?;
    let record = request.to_record()?;

    let receipt = state
        .publisher
        .publish(record)
        .await
        .inspect_err(|_| state.metrics.publish_failed())?;

    state.metrics.record_published();
    debug!(
        "Published to {} [partition {}] at offset {}",
        state.publisher.topic(),
        receipt.partition,
        receipt.offset
    );

    Ok(Json(PublishResponse::sent(request.message)))
}
