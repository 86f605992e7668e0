//! Payload classification and rendering.
//!
//! # Data Flow
//! ```text
//! body bytes
//!     → classify.rs (UTF-8 decode, optional JSON parse)
//!     → render.rs (headline + indented JSON or verbatim text)
//!     → log event
//! ```
//!
//! Nothing here can fail: decode and parse errors only select which
//! headline is logged.

pub mod classify;
pub mod render;

pub use classify::{DecodedText, Payload, PayloadMode};
pub use render::{pretty_json, JSON_HEADLINE, NON_JSON_HEADLINE, RAW_HEADLINE};
