//! Diagnostic HTTP echo listener.
//!
//! Accepts POST requests on any path, logs the body (pretty-printed when it
//! is JSON, verbatim otherwise) and answers `200 Received POST data`. Useful
//! for watching what a webhook sender or alert poster actually transmits.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client POST
//!     ──────────▶ net::listener ──▶ http::server ──▶ http::request ──▶ payload
//!                                        │                              │
//!     ◀────────── http::response ◀───────┘                         log event
//!
//!     config ─▶ lifecycle::startup      lifecycle::signals ─▶ lifecycle::shutdown
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod payload;

pub use config::EchoConfig;
pub use http::EchoServer;
pub use lifecycle::Shutdown;
pub use net::EchoListener;
