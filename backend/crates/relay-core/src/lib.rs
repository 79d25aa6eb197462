pub mod display_buffer;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use display_buffer::{DisplayBuffer, RecentEntries};
pub use error::{CoreError, Result as CoreResult};
pub use models::delivery_state::DeliveryState;
pub use models::payload::Payload;
pub use models::publish_request::PublishRequest;
pub use models::record::Record;
