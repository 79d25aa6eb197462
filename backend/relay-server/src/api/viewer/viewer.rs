use crate::{SubscriberState, render_viewer_page};

use axum::{extract::State, response::Html};

/// GET / (subscriber)
///
/// Page with the buffered messages, oldest first.
pub async fn viewer(State(state): State<SubscriberState>) -> Html<String> {
    let entries = state.buffer.snapshot().await;
    Html(render_viewer_page(
        &entries,
        &state.topic,
        state.buffer.capacity(),
        state.refresh_ms,
    ))
}
