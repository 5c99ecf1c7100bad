//! Error types for spreadsheet ingestion.

use thiserror::Error;

/// Errors that can occur while ingesting the spreadsheet.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The share URL carries no extractable sheet identifier
    #[error("invalid sheet url: {0}")]
    InvalidSource(String),

    /// The export endpoint answered with a non-success status
    #[error("sheet export returned http {status}")]
    Status { status: u16 },

    /// The request never completed
    #[error("sheet fetch failed: {0}")]
    Network(String),
}
