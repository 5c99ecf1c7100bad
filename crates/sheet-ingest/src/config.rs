//! Configuration for the sheet client.

use crate::error::IngestError;
use std::env;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`SheetClient`](crate::SheetClient).
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Share URL of the source spreadsheet.
    pub url: String,

    /// Request timeout in seconds. A fetch that exceeds this fails with
    /// [`IngestError::Network`] instead of hanging.
    pub timeout_secs: u64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SheetConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `PULSO_SHEET_URL` - share URL of the source spreadsheet
    ///
    /// Optional environment variables:
    /// - `PULSO_SHEET_TIMEOUT_SECS` - request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self, IngestError> {
        let url = env::var("PULSO_SHEET_URL")
            .map_err(|_| IngestError::InvalidSource("PULSO_SHEET_URL not set".to_string()))?;

        let timeout_secs = env::var("PULSO_SHEET_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self { url, timeout_secs })
    }

    /// Create a new config builder.
    pub fn builder() -> SheetConfigBuilder {
        SheetConfigBuilder::default()
    }
}

/// Builder for [`SheetConfig`].
#[derive(Debug, Default)]
pub struct SheetConfigBuilder {
    config: SheetConfig,
}

impl SheetConfigBuilder {
    /// Set the share URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> SheetConfig {
        self.config
    }
}
