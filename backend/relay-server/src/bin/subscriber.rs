use relay_broker::{DeliveryStatus, DeliveryTask, KafkaSubscriber, Metrics, ShutdownCoordinator};
use relay_core::{DeliveryState, DisplayBuffer};
use relay_server::{ServerResult, SubscriberState, build_subscriber_router, startup};

use std::process::ExitCode;

use log::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => startup::report_fatal("relay-subscriber", &e),
    }
}

async fn run() -> ServerResult<()> {
    let config = startup::load_config()?;
    startup::init_logging(&config)?;

    info!("Starting relay-subscriber v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let buffer = DisplayBuffer::new(config.subscriber.retention);
    let status = DeliveryStatus::new();
    let shutdown = ShutdownCoordinator::new();

    status.set(DeliveryState::Subscribing);
    let source = KafkaSubscriber::connect(&config.broker)?;

    let task = DeliveryTask::new(source, buffer.clone(), status.clone(), Metrics::new());
    let delivery = tokio::spawn(task.run(shutdown.subscribe_guard()));

    startup::spawn_signal_handler(shutdown.clone());

    let state = SubscriberState::new(
        buffer,
        status,
        config.broker.topic.clone(),
        &config.subscriber,
    );
    let app = build_subscriber_router(state);
    let served = match startup::bind("Subscriber", &config.subscriber.bind_addr()).await {
        Ok(listener) => startup::serve(listener, app, &shutdown).await,
        Err(e) => Err(e),
    };

    // Stop the consumer whether the server exited cleanly or not
    shutdown.shutdown();
    if let Err(e) = delivery.await {
        warn!("Delivery task ended abnormally: {}", e);
    }

    served?;
    info!("Subscriber stopped");
    Ok(())
}
