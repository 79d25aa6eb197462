use serde_json::Value;

/// Decoded view of a delivered record value.
///
/// Values that parse as JSON are kept structured so they can be
/// pretty-printed; anything else is shown as text.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Raw(String),
}

impl Payload {
    /// Decode a record value. Never fails: invalid UTF-8 is replaced and
    /// non-JSON input falls back to [`Payload::Raw`].
    pub fn decode(value: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(value) {
            Ok(json) => Payload::Json(json),
            Err(_) => Payload::Raw(String::from_utf8_lossy(value).into_owned()),
        }
    }

    /// Text shown in the viewer.
    pub fn render(&self) -> String {
        match self {
            Payload::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Payload::Raw(text) => text.clone(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Json(_) => "json",
            Payload::Raw(_) => "raw",
        }
    }
}
