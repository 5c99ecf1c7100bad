//! HTTP client for the spreadsheet export endpoint.

use crate::config::SheetConfig;
use crate::error::IngestError;
use crate::records::parse_records;
use crate::url::csv_export_url;
use feedback_core::FeedbackRecord;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Fetches the published spreadsheet and maps it into feedback records.
///
/// The client is cheap to clone and holds no mutable state; every fetch is
/// a fresh GET against the derived export URL.
#[derive(Debug, Clone)]
pub struct SheetClient {
    client: Client,
    config: SheetConfig,
}

impl SheetClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SheetConfig) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| IngestError::Network(format!("failed to create http client: {}", e)))?;

        info!(
            timeout_secs = config.timeout_secs,
            "sheet client initialized"
        );

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`SheetConfig::from_env`] for the variables involved.
    pub fn from_env() -> Result<Self, IngestError> {
        Self::new(SheetConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Fetch the raw CSV export text.
    pub async fn fetch_csv(&self) -> Result<String, IngestError> {
        let export_url = csv_export_url(&self.config.url)?;
        debug!(url = %export_url, "fetching sheet export");

        let response = self
            .client
            .get(&export_url)
            .send()
            .await
            .map_err(|e| IngestError::Network(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Status {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| IngestError::Network(format!("failed to read body: {}", e)))
    }

    /// Fetch and map the spreadsheet into feedback records.
    pub async fn fetch_records(&self) -> Result<Vec<FeedbackRecord>, IngestError> {
        let text = self.fetch_csv().await?;
        let records = parse_records(&text);
        info!(count = records.len(), "ingested feedback records");
        Ok(records)
    }
}
