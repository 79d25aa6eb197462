pub mod delivery_state;
pub mod payload;
pub mod publish_request;
pub mod record;
