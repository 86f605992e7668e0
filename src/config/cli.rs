//! Command-line arguments.
//!
//! CLI values take precedence over config file values, which take precedence
//! over built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::EchoConfig;
use crate::config::validation::validate_config;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "echo-listener")]
#[command(version)]
#[command(about = "Logs the body of every POST it receives and acknowledges it", long_about = None)]
pub struct CliArgs {
    /// Port to listen on, on all interfaces (default 8080)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log bodies as raw text without attempting to parse JSON
    #[arg(long)]
    pub raw: bool,

    /// Log filter, e.g. "info" or "echo_listener=debug"
    #[arg(long)]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the effective configuration.
    pub fn into_config(self) -> Result<EchoConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => EchoConfig::default(),
        };

        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if self.raw {
            config.payload.attempt_structured_parse = false;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
