pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod html;
pub mod logger;
pub mod routes;
pub mod startup;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    publish::{
        form_page::publisher_page, publish::publish, publish_form::PublishForm,
        publish_response::PublishResponse,
    },
    viewer::{viewer::viewer, viewer_page::render_viewer_page},
};
pub use app_state::{PublisherState, SubscriberState};
pub use error::{Result as ServerResult, ServerError};
pub use routes::{build_publisher_router, build_subscriber_router};
