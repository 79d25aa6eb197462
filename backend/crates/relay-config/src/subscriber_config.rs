use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_SUBSCRIBER_PORT, MIN_PORT,
};

use serde::Deserialize;

// Viewer retention window (entries)
pub const MIN_RETENTION: usize = 1;
pub const MAX_RETENTION: usize = 1000;
pub const DEFAULT_RETENTION: usize = 10;

// Viewer page reload interval (seconds)
pub const MIN_REFRESH_SECS: u64 = 1;
pub const MAX_REFRESH_SECS: u64 = 3600;
pub const DEFAULT_REFRESH_SECS: u64 = 5;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SubscriberConfig {
    pub host: String,
    pub port: u16,
    /// Number of recent messages kept for the viewer
    pub retention: usize,
    /// Viewer page auto-reload interval
    pub refresh_secs: u64,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_SUBSCRIBER_PORT,
            retention: DEFAULT_RETENTION,
            refresh_secs: DEFAULT_REFRESH_SECS,
        }
    }
}

impl SubscriberConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn refresh_ms(&self) -> u64 {
        self.refresh_secs * 1000
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "subscriber.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::server("subscriber.host cannot be empty"));
        }

        if self.retention < MIN_RETENTION || self.retention > MAX_RETENTION {
            return Err(ConfigError::viewer(format!(
                "subscriber.retention must be {}-{}, got {}",
                MIN_RETENTION, MAX_RETENTION, self.retention
            )));
        }

        if self.refresh_secs < MIN_REFRESH_SECS || self.refresh_secs > MAX_REFRESH_SECS {
            return Err(ConfigError::viewer(format!(
                "subscriber.refresh_secs must be {}-{}, got {}",
                MIN_REFRESH_SECS, MAX_REFRESH_SECS, self.refresh_secs
            )));
        }

        Ok(())
    }
}
