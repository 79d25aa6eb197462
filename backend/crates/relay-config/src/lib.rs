mod broker_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod publisher_config;
mod subscriber_config;

#[cfg(test)]
mod tests;

pub use broker_config::{AutoOffsetReset, BrokerConfig};
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use publisher_config::PublisherConfig;
pub use subscriber_config::{DEFAULT_RETENTION, SubscriberConfig};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PUBLISHER_PORT: u16 = 8001;
const DEFAULT_SUBSCRIBER_PORT: u16 = 8002;
const MIN_PORT: u16 = 1024;

const DEFAULT_BOOTSTRAP_SERVERS: &str = "localhost:9092,localhost:9093";
const DEFAULT_TOPIC: &str = "test-topic";
const DEFAULT_GROUP_ID: &str = "test-group";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const CONFIG_DIR_ENV: &str = "RELAY_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".relay";
const CONFIG_FILE_NAME: &str = "config.toml";
