//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router: POST on every path, 501 for other methods
//! - Wire up middleware (request ID, tracing, access log, limits)
//! - Serve connections from the bound listener until shutdown

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware,
    response::Response,
    routing::{post, MethodRouter},
    Router,
};
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::SetRequestIdLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::EchoConfig;
use crate::http::request::{declared_content_length, read_body, request_id, UuidRequestId};
use crate::http::response::{acknowledge, unsupported_method, RequestError};
use crate::net::EchoListener;
use crate::observability::access_log;
use crate::payload::{Payload, PayloadMode};

/// Application state injected into handlers.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub mode: PayloadMode,
}

/// The echo listener's HTTP server.
pub struct EchoServer {
    router: Router,
    config: EchoConfig,
}

impl EchoServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: EchoConfig) -> Self {
        let state = AppState {
            mode: config.payload.mode(),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &EchoConfig, state: AppState) -> Router {
        let echo: MethodRouter<AppState> = post(receive_post).fallback(unsupported_method);

        Router::new()
            .route("/", echo.clone())
            .route("/{*path}", echo)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(middleware::from_fn(access_log))
                    .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.limits.request_timeout_secs,
                    ))),
            )
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &EchoConfig {
        &self.config
    }

    /// Serve connections until `shutdown` fires. The listener is released
    /// when this returns.
    pub async fn run(
        self,
        listener: EchoListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        tracing::info!("Starting HTTP server on port {}", listener.port());
        tracing::debug!(
            address = %listener.local_addr(),
            structured = self.config.payload.attempt_structured_parse,
            request_timeout_secs = self.config.limits.request_timeout_secs,
            max_body_bytes = self.config.limits.max_body_bytes,
            "Server configuration"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener.into_inner(), app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Handle one POST: read exactly Content-Length bytes, log them, acknowledge.
async fn receive_post(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Result<Response, RequestError> {
    let request_id = request_id(request.headers());
    let reject = |e: &RequestError| {
        tracing::warn!(request_id = %request_id, error = %e, "Rejecting request");
    };

    let declared = declared_content_length(request.headers()).inspect_err(reject)?;
    let bytes = read_body(request.into_body(), declared)
        .await
        .inspect_err(reject)?;

    let payload = Payload::classify(&bytes, state.mode);
    if let Payload::NonJson(decoded) | Payload::Raw(decoded) = &payload {
        if !decoded.valid_utf8 {
            tracing::debug!(request_id = %request_id, "Body is not valid UTF-8, decoded lossily");
        }
    }

    // Fields live on the span so the payload text ends its own line.
    let span = tracing::info_span!("payload", request_id = %request_id, bytes = bytes.len());
    let _entered = span.enter();
    tracing::info!("{}\n{}", payload.headline(), payload.render());

    Ok(acknowledge())
}
