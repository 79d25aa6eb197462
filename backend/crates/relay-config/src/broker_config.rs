use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BOOTSTRAP_SERVERS, DEFAULT_GROUP_ID, DEFAULT_TOPIC,
};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

// Producer delivery timeout (milliseconds)
pub const MIN_MESSAGE_TIMEOUT_MS: u64 = 100;
pub const MAX_MESSAGE_TIMEOUT_MS: u64 = 300_000;
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u64 = 5000;

// Consumer group session timeout (milliseconds)
pub const MIN_SESSION_TIMEOUT_MS: u64 = 1000;
pub const MAX_SESSION_TIMEOUT_MS: u64 = 300_000;
pub const DEFAULT_SESSION_TIMEOUT_MS: u64 = 6000;

pub const DEFAULT_ACKS: &str = "all";
const VALID_ACKS: [&str; 4] = ["0", "1", "all", "-1"];

/// Where a new consumer group starts reading.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AutoOffsetReset {
    Earliest,
    #[default]
    Latest,
}

impl AutoOffsetReset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Earliest => "earliest",
            Self::Latest => "latest",
        }
    }
}

impl fmt::Display for AutoOffsetReset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AutoOffsetReset {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "earliest" => Ok(Self::Earliest),
            "latest" => Ok(Self::Latest),
            other => Err(ConfigError::broker(format!(
                "auto_offset_reset must be 'earliest' or 'latest', got '{other}'"
            ))),
        }
    }
}

/// Kafka connection settings shared by both services.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    /// Comma-separated bootstrap addresses
    pub bootstrap_servers: String,
    pub topic: String,
    /// Consumer group of the subscriber
    pub group_id: String,
    pub message_timeout_ms: u64,
    pub session_timeout_ms: u64,
    pub auto_offset_reset: AutoOffsetReset,
    /// Producer acknowledgement level
    pub acks: String,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            bootstrap_servers: String::from(DEFAULT_BOOTSTRAP_SERVERS),
            topic: String::from(DEFAULT_TOPIC),
            group_id: String::from(DEFAULT_GROUP_ID),
            message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS,
            session_timeout_ms: DEFAULT_SESSION_TIMEOUT_MS,
            auto_offset_reset: AutoOffsetReset::default(),
            acks: String::from(DEFAULT_ACKS),
        }
    }
}

impl BrokerConfig {
    /// Bootstrap addresses split on commas, trimmed.
    pub fn bootstrap_list(&self) -> Vec<&str> {
        self.bootstrap_servers.split(',').map(str::trim).collect()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let servers = self.bootstrap_list();
        if servers.iter().all(|s| s.is_empty()) {
            return Err(ConfigError::broker("broker.bootstrap_servers cannot be empty"));
        }
        if servers.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::broker(format!(
                "broker.bootstrap_servers contains an empty address: '{}'",
                self.bootstrap_servers
            )));
        }

        if self.topic.trim().is_empty() {
            return Err(ConfigError::broker("broker.topic cannot be empty"));
        }

        if self.group_id.trim().is_empty() {
            return Err(ConfigError::broker("broker.group_id cannot be empty"));
        }

        if self.message_timeout_ms < MIN_MESSAGE_TIMEOUT_MS
            || self.message_timeout_ms > MAX_MESSAGE_TIMEOUT_MS
        {
            return Err(ConfigError::broker(format!(
                "broker.message_timeout_ms must be {}-{}, got {}",
                MIN_MESSAGE_TIMEOUT_MS, MAX_MESSAGE_TIMEOUT_MS, self.message_timeout_ms
            )));
        }

        if self.session_timeout_ms < MIN_SESSION_TIMEOUT_MS
            || self.session_timeout_ms > MAX_SESSION_TIMEOUT_MS
        {
            return Err(ConfigError::broker(format!(
                "broker.session_timeout_ms must be {}-{}, got {}",
                MIN_SESSION_TIMEOUT_MS, MAX_SESSION_TIMEOUT_MS, self.session_timeout_ms
            )));
        }

        if !VALID_ACKS.contains(&self.acks.as_str()) {
            return Err(ConfigError::broker(format!(
                "broker.acks must be one of {:?}, got '{}'",
                VALID_ACKS, self.acks
            )));
        }

        Ok(())
    }
}
