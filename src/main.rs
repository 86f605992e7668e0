use clap::Parser;

use echo_listener::config::CliArgs;
use echo_listener::lifecycle::{self, Shutdown};
use echo_listener::observability::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliArgs::parse().into_config()?;

    init_logging(&config.logging.level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.listener.port,
        structured = config.payload.attempt_structured_parse,
        "echo-listener starting"
    );

    let shutdown = Shutdown::new();
    lifecycle::spawn_signal_handler(shutdown.clone());

    lifecycle::start(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
