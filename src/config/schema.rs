//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files and
//! fall back to defaults for any omitted section or field.

use serde::{Deserialize, Serialize};

use crate::payload::PayloadMode;

/// Root configuration for the echo listener.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct EchoConfig {
    /// Listener configuration (port).
    pub listener: ListenerConfig,

    /// How received bodies are rendered in the log.
    pub payload: PayloadConfig,

    /// Request timeout and body size limits.
    pub limits: LimitsConfig,

    /// Log filter settings.
    pub logging: LoggingConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// TCP port bound on all interfaces. Port 0 picks an ephemeral port.
    pub port: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Payload rendering configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PayloadConfig {
    /// Try to parse bodies as JSON and pretty-print them.
    pub attempt_structured_parse: bool,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            attempt_structured_parse: true,
        }
    }
}

impl PayloadConfig {
    pub fn mode(&self) -> PayloadMode {
        if self.attempt_structured_parse {
            PayloadMode::Structured
        } else {
            PayloadMode::Raw
        }
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum time to receive and answer one request (408 after this).
    pub request_timeout_secs: u64,

    /// Maximum accepted body size in bytes (413 above this).
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            max_body_bytes: 16 * 1024 * 1024,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "echo_listener=info,tower_http=info".to_string(),
        }
    }
}
