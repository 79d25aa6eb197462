use bytes::Bytes;

/// A key/value pair exchanged through the broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: Option<Bytes>,
    pub value: Bytes,
}

impl Record {
    pub fn new(key: Option<Bytes>, value: impl Into<Bytes>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    /// Record without a key; the broker picks the partition.
    pub fn unkeyed(value: impl Into<Bytes>) -> Self {
        Self::new(None, value)
    }

    /// Key as text for logging. Non UTF-8 keys are shown lossily.
    pub fn key_display(&self) -> String {
        match &self.key {
            Some(key) => String::from_utf8_lossy(key).into_owned(),
            None => String::from("<none>"),
        }
    }
}
