//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! startup
//!     → listener.rs (bind 0.0.0.0:<port>, own the socket)
//!     → http::server (accept loop, one task per connection)
//! ```

pub mod listener;

pub use listener::{EchoListener, ListenerError};
