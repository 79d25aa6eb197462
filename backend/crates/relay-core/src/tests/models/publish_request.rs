use crate::{CoreError, PublishRequest};

use bytes::Bytes;
use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serde_json::json;

#[test]
fn given_valid_json_when_parsed_then_ok() {
    // When
    let result = PublishRequest::parse(Some("k1"), Some(r#"{"user":"john"}"#));

    // Then
    assert_that!(result, ok(anything()));
    let request = result.unwrap();
    assert_eq!(request.message, json!({"user": "john"}));
    assert_that!(request.key.as_str(), eq("k1"));
}

#[test]
fn given_malformed_json_when_parsed_then_invalid_json_error() {
    // When
    let result = PublishRequest::parse(None, Some("{bad json"));

    // Then
    assert!(matches!(result, Err(CoreError::InvalidJson { .. })));
}

#[test]
fn given_missing_message_when_parsed_then_validation_error() {
    let result = PublishRequest::parse(Some("k"), None);

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "message"
    ));
}

#[test]
fn given_empty_message_when_parsed_then_error() {
    assert_that!(PublishRequest::parse(None, Some("")), err(anything()));
}

#[test]
fn given_no_key_when_record_built_then_record_has_no_key() {
    // Given
    let request = PublishRequest::parse(None, Some("[1, 2, 3]")).unwrap();

    // When
    let record = request.to_record().unwrap();

    // Then
    assert!(record.key.is_none());
}

#[test]
fn given_empty_key_when_record_built_then_record_has_no_key() {
    let request = PublishRequest::parse(Some(""), Some("{}")).unwrap();

    assert!(request.record_key().is_none());
}

#[test]
fn given_non_empty_key_when_record_built_then_key_is_utf8_bytes() {
    // Given
    let request = PublishRequest::parse(Some("clé"), Some("{}")).unwrap();

    // When
    let record = request.to_record().unwrap();

    // Then
    assert_eq!(record.key, Some(Bytes::from("clé".as_bytes())));
}

#[test]
fn given_spaced_json_when_canonicalized_then_whitespace_removed() {
    // Given
    let request =
        PublishRequest::parse(None, Some("{ \"user\" : \"john\",\n  \"action\":\"login\" }"))
            .unwrap();

    // When
    let value = request.canonical_value().unwrap();

    // Then
    assert_eq!(&value[..], br#"{"user":"john","action":"login"}"#);
}

#[test]
fn given_integer_beyond_64_bits_when_reencoded_then_digits_preserved() {
    // Given
    let request =
        PublishRequest::parse(None, Some(r#"{"id": 12345678901234567890123}"#)).unwrap();

    // When
    let canonical = request.canonical_value().unwrap();

    // Then
    assert_eq!(canonical, Bytes::from_static(br#"{"id":12345678901234567890123}"#));
    assert_that!(
        request.message.to_string().as_str(),
        eq(r#"{"id":12345678901234567890123}"#)
    );
}
