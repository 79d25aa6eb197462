use crate::Payload;

use googletest::assert_that;
use googletest::prelude::eq;
use serde_json::json;

#[test]
fn given_json_object_when_decoded_then_json_variant() {
    // When
    let payload = Payload::decode(br#"{"user":"john","action":"login"}"#);

    // Then
    assert_eq!(payload, Payload::Json(json!({"user": "john", "action": "login"})));
    assert_that!(payload.kind(), eq("json"));
}

#[test]
fn given_json_object_when_rendered_then_pretty_printed_in_key_order() {
    // Given
    let payload = Payload::decode(br#"{"user":"john","action":"login"}"#);

    // When
    let rendered = payload.render();

    // Then
    assert_that!(
        rendered.as_str(),
        eq("{\n  \"user\": \"john\",\n  \"action\": \"login\"\n}")
    );
}

#[test]
fn given_plain_text_when_decoded_then_raw_variant() {
    // When
    let payload = Payload::decode(b"hello world");

    // Then
    assert_eq!(payload, Payload::Raw(String::from("hello world")));
    assert_that!(payload.render().as_str(), eq("hello world"));
    assert_that!(payload.kind(), eq("raw"));
}

#[test]
fn given_truncated_json_when_decoded_then_raw_text_kept() {
    let payload = Payload::decode(b"{bad json");

    assert_that!(payload.render().as_str(), eq("{bad json"));
}

#[test]
fn given_invalid_utf8_when_decoded_then_lossy_raw() {
    let payload = Payload::decode(&[0x66, 0x6f, 0xff, 0x6f]);

    assert_that!(payload.render().as_str(), eq("fo\u{FFFD}o"));
}

#[test]
fn given_empty_value_when_decoded_then_empty_raw() {
    let payload = Payload::decode(b"");

    assert_that!(payload.render().as_str(), eq(""));
}

#[test]
fn given_json_scalar_when_rendered_then_scalar_text() {
    assert_that!(Payload::decode(b"42").render().as_str(), eq("42"));
    assert_that!(Payload::decode(b"\"hi\"").render().as_str(), eq("\"hi\""));
}

#[test]
fn given_integer_beyond_64_bits_when_rendered_then_digits_preserved() {
    let payload = Payload::decode(br#"{"id":12345678901234567890123}"#);

    assert_eq!(payload.render(), "{\n  \"id\": 12345678901234567890123\n}");
}
