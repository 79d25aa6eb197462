use relay_broker::{KafkaPublisher, RecordPublisher, ShutdownCoordinator};
use relay_server::{PublisherState, ServerResult, build_publisher_router, startup};

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

/// Bound on waiting for in-flight records at shutdown
const FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => startup::report_fatal("relay-publisher", &e),
    }
}

async fn run() -> ServerResult<()> {
    let config = startup::load_config()?;
    startup::init_logging(&config)?;

    info!("Starting relay-publisher v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // One producer for the whole process
    let publisher = Arc::new(KafkaPublisher::new(&config.broker)?);
    info!(
        "Producer connected to [{}], topic '{}'",
        config.broker.bootstrap_servers,
        publisher.topic()
    );

    let shutdown = ShutdownCoordinator::new();
    startup::spawn_signal_handler(shutdown.clone());

    let app = build_publisher_router(PublisherState::new(publisher.clone()));
    let listener = startup::bind("Publisher", &config.publisher.bind_addr()).await?;
    startup::serve(listener, app, &shutdown).await?;

    info!("Flushing producer");
    if let Err(e) = publisher.flush(FLUSH_TIMEOUT).await {
        warn!("Producer flush incomplete: {}", e);
    }

    info!("Publisher stopped");
    Ok(())
}
