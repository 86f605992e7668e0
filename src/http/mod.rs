//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, Content-Length contract, body read)
//!     → payload (classify & log)
//!     → response.rs (fixed acknowledgement or rejection)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::{RequestError, ACK_BODY};
pub use server::EchoServer;
