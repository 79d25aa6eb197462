use serde::Deserialize;

/// Form body of `POST /publish`.
///
/// Both fields are optional at the extractor level so a missing message
/// is reported in-band instead of as an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PublishForm {
    /// Record key; empty means no key
    #[serde(default)]
    pub key: Option<String>,

    /// JSON text (required)
    #[serde(default)]
    pub message: Option<String>,
}
