use crate::{
    BrokerConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, PublisherConfig, SubscriberConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub broker: BrokerConfig,
    pub publisher: PublisherConfig,
    pub subscriber: SubscriberConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for RELAY_CONFIG_DIR env var, else use ./.relay/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: RELAY_CONFIG_DIR env var > ./.relay/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.broker.validate()?;
        self.publisher.validate()?;
        self.subscriber.validate()?;

        if self.publisher.port != 0
            && self.publisher.port == self.subscriber.port
            && hosts_overlap(&self.publisher.host, &self.subscriber.host)
        {
            return Err(ConfigError::server(format!(
                "publisher and subscriber cannot share {}",
                self.publisher.bind_addr()
            )));
        }

        if let Some(ref file) = self.logging.file
            && (file.is_empty() || file.contains('/') || file.contains('\\') || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be a plain file name inside logging.dir",
            ));
        }

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  broker: [{}] topic={} group={}",
            self.broker.bootstrap_servers, self.broker.topic, self.broker.group_id
        );
        info!(
            "  delivery: acks={}, message_timeout={}ms, session_timeout={}ms, offset_reset={}",
            self.broker.acks,
            self.broker.message_timeout_ms,
            self.broker.session_timeout_ms,
            self.broker.auto_offset_reset
        );
        info!("  publisher: {}", self.publisher.bind_addr());
        info!(
            "  subscriber: {} (retention {}, refresh {}s)",
            self.subscriber.bind_addr(),
            self.subscriber.retention,
            self.subscriber.refresh_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Broker
        Self::apply_env_string("KAFKA_BOOTSTRAP_SERVERS", &mut self.broker.bootstrap_servers);
        Self::apply_env_string("RELAY_BROKER_TOPIC", &mut self.broker.topic);
        Self::apply_env_string("RELAY_BROKER_GROUP_ID", &mut self.broker.group_id);
        Self::apply_env_parse(
            "RELAY_BROKER_MESSAGE_TIMEOUT_MS",
            &mut self.broker.message_timeout_ms,
        )?;
        Self::apply_env_parse(
            "RELAY_BROKER_SESSION_TIMEOUT_MS",
            &mut self.broker.session_timeout_ms,
        )?;
        Self::apply_env_parse(
            "RELAY_BROKER_AUTO_OFFSET_RESET",
            &mut self.broker.auto_offset_reset,
        )?;
        Self::apply_env_string("RELAY_BROKER_ACKS", &mut self.broker.acks);

        // Publisher
        Self::apply_env_string("RELAY_PUBLISHER_HOST", &mut self.publisher.host);
        Self::apply_env_parse("RELAY_PUBLISHER_PORT", &mut self.publisher.port)?;

        // Subscriber
        Self::apply_env_string("RELAY_SUBSCRIBER_HOST", &mut self.subscriber.host);
        Self::apply_env_parse("RELAY_SUBSCRIBER_PORT", &mut self.subscriber.port)?;
        Self::apply_env_parse("RELAY_SUBSCRIBER_RETENTION", &mut self.subscriber.retention)?;
        Self::apply_env_parse(
            "RELAY_SUBSCRIBER_REFRESH_SECS",
            &mut self.subscriber.refresh_secs,
        )?;

        // Logging
        Self::apply_env_parse("RELAY_LOG_LEVEL", &mut self.logging.level)?;
        Self::apply_env_bool("RELAY_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("RELAY_LOG_FILE", &mut self.logging.file);

        Ok(())
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Runs before the logger exists, so an unparseable value fails the load.
    fn apply_env_parse<T: std::str::FromStr>(
        var_name: &str,
        target: &mut T,
    ) -> ConfigErrorResult<()> {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::config(format!("invalid {var_name}={val}")))?;
        }
        Ok(())
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

/// Wildcard binds overlap every address on the same port.
fn hosts_overlap(a: &str, b: &str) -> bool {
    const WILDCARDS: [&str; 2] = ["0.0.0.0", "::"];
    a == b || WILDCARDS.contains(&a) || WILDCARDS.contains(&b)
}
