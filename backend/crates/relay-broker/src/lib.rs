pub mod client_config;
pub mod delivery;
pub mod delivery_status;
pub mod error;
pub mod kafka_publisher;
pub mod kafka_subscriber;
pub mod metrics;
pub mod record_publisher;
pub mod record_source;
pub mod shutdown_coordinator;
pub mod shutdown_guard;

pub use client_config::{consumer_config, producer_config};
pub use delivery::DeliveryTask;
pub use delivery_status::DeliveryStatus;
pub use error::{BrokerError, Result as BrokerResult};
pub use kafka_publisher::KafkaPublisher;
pub use kafka_subscriber::KafkaSubscriber;
pub use metrics::Metrics;
pub use record_publisher::{DeliveryReceipt, RecordPublisher};
pub use record_source::RecordSource;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
