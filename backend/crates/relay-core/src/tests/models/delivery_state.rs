use crate::DeliveryState;

#[test]
fn test_delivery_state_as_str() {
    assert_eq!(DeliveryState::NotStarted.as_str(), "not_started");
    assert_eq!(DeliveryState::Subscribing.as_str(), "subscribing");
    assert_eq!(DeliveryState::Running.as_str(), "running");
    assert_eq!(DeliveryState::Stopped.as_str(), "stopped");
}

#[test]
fn test_delivery_state_default() {
    assert_eq!(DeliveryState::default(), DeliveryState::NotStarted);
}

#[test]
fn test_delivery_state_serializes_snake_case() {
    let json = serde_json::to_string(&DeliveryState::NotStarted).unwrap();
    assert_eq!(json, "\"not_started\"");
}
