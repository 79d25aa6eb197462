mod delivery_state;
mod payload;
mod publish_request;
