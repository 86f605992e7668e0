//! Startup orchestration.
//!
//! Fail fast: any error before the server is serving is fatal. The listener
//! is bound last, once the server is built.

use thiserror::Error;

use crate::config::EchoConfig;
use crate::http::EchoServer;
use crate::lifecycle::Shutdown;
use crate::net::{EchoListener, ListenerError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind the configured port and serve until `shutdown` is triggered.
pub async fn start(config: EchoConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    let signal = shutdown.subscribe();
    let server = EchoServer::new(config);
    let listener = EchoListener::bind(&server.config().listener).await?;

    server.run(listener, signal).await?;
    Ok(())
}
