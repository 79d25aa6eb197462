//! Process plumbing shared by both binaries.

use crate::{ServerError, ServerResult, logger};

use relay_broker::ShutdownCoordinator;
use relay_config::Config;

use std::process::ExitCode;

use log::{LevelFilter, error, info};
use tokio::net::TcpListener;

/// Load `.env`, then the config file and env overrides, then validate.
pub fn load_config() -> ServerResult<Config> {
    // A missing .env is normal
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}

/// Initialize the logger from `[logging]`, creating the log directory if needed.
pub fn init_logging(config: &Config) -> ServerResult<()> {
    let log_file = config.log_file_path()?;
    if let Some(dir) = log_file.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir)?;
    }

    logger::initialize(config.logging.level, log_file, config.logging.colored)
}

/// Trigger `shutdown` on Ctrl+C.
pub fn spawn_signal_handler(shutdown: ShutdownCoordinator) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });
}

/// Bind `bind_addr`, logging the address actually bound.
pub async fn bind(service: &str, bind_addr: &str) -> ServerResult<TcpListener> {
    let listener = TcpListener::bind(bind_addr).await?;
    info!("{} listening on http://{}", service, listener.local_addr()?);
    Ok(listener)
}

/// Serve `app` until `shutdown` fires.
pub async fn serve(
    listener: TcpListener,
    app: axum::Router,
    shutdown: &ShutdownCoordinator,
) -> ServerResult<()> {
    let mut guard = shutdown.subscribe_guard();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            guard.wait().await;
            info!("HTTP server draining");
        })
        .await?;

    Ok(())
}

/// Report an error that ends the process. Falls back to stderr when the
/// logger never came up.
pub fn report_fatal(service: &str, e: &ServerError) -> ExitCode {
    if log::max_level() == LevelFilter::Off {
        eprintln!("{service} failed: {e}");
    } else {
        error!("{} failed: {}", service, e);
    }
    ExitCode::FAILURE
}
