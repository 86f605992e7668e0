//! TCP listener ownership.
//!
//! # Responsibilities
//! - Bind to the configured port on all interfaces
//! - Own the bound socket until the server takes it over
//! - Release the port when dropped

use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Failed to bind to address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// The bound socket of the echo listener.
#[derive(Debug)]
pub struct EchoListener {
    inner: TcpListener,
    local_addr: SocketAddr,
}

impl EchoListener {
    /// Bind `0.0.0.0:<port>`.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
        Self::bind_addr(addr).await
    }

    /// Bind an explicit address.
    pub async fn bind_addr(addr: SocketAddr) -> Result<Self, ListenerError> {
        let inner = TcpListener::bind(addr)
            .await
            .map_err(|source| ListenerError::Bind { addr, source })?;
        let local_addr = inner
            .local_addr()
            .map_err(|source| ListenerError::Bind { addr, source })?;

        tracing::debug!(address = %local_addr, "Listener bound");

        Ok(Self { inner, local_addr })
    }

    /// Address actually bound (resolves port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn port(&self) -> u16 {
        self.local_addr.port()
    }

    /// Hand the socket over to the HTTP server.
    pub fn into_inner(self) -> TcpListener {
        self.inner
    }
}
