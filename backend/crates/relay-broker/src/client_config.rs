use relay_config::BrokerConfig;

use rdkafka::ClientConfig;

/// Producer settings: every send waits for `acks`, librdkafka retries
/// internally until `message.timeout.ms` expires.
pub fn producer_config(config: &BrokerConfig) -> ClientConfig {
    let mut client = ClientConfig::new();
    client
        .set("bootstrap.servers", config.bootstrap_list().join(","))
        .set("message.timeout.ms", config.message_timeout_ms.to_string())
        .set("acks", config.acks.as_str());
    client
}

/// Consumer settings: offsets are auto-committed, the viewer is best-effort.
pub fn consumer_config(config: &BrokerConfig) -> ClientConfig {
    let mut client = ClientConfig::new();
    client
        .set("bootstrap.servers", config.bootstrap_list().join(","))
        .set("group.id", config.group_id.as_str())
        .set("enable.partition.eof", "false")
        .set("enable.auto.commit", "true")
        .set("session.timeout.ms", config.session_timeout_ms.to_string())
        .set("auto.offset.reset", config.auto_offset_reset.as_str());
    client
}
