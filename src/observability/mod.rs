//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers & middleware
//!     → logging.rs (access log, subscriber setup)
//!     → tracing-subscriber fmt layer
//!     → stdout
//! ```
//!
//! Every event of a request carries its `request_id`.

pub mod logging;

pub use logging::{access_log, init_logging};
