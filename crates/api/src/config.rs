//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Dashboard API server configuration.
///
/// The spreadsheet source and the Gemini enricher read their own variables
/// (`PULSO_SHEET_URL`, `GEMINI_API_KEY`, and friends); this covers only the
/// server itself.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `PULSO_API_ADDR` | Server bind address | `127.0.0.1:8787` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("PULSO_API_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8787".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        Ok(Self { addr })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PULSO_API_ADDR format")]
    InvalidAddr,
}
