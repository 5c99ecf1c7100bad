//! Error types for dashboard analysis runs.

use feedback_core::EnrichError;
use sheet_ingest::IngestError;
use thiserror::Error;

/// Errors that can occur while building or refreshing the dashboard.
///
/// Every ingestion failure collapses into [`AnalysisError::Source`]; the
/// user sees one source-unavailable banner while the underlying cause goes
/// to the logs.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Fetching or parsing the feedback source failed.
    #[error("source error: {0}")]
    Source(#[from] IngestError),

    /// The date filter left no records to analyze.
    #[error("no records in the selected date range")]
    NoData,

    /// The start date is after the end date.
    #[error("start date is after end date")]
    DateRange,

    /// An AI enrichment call failed.
    #[error("enrichment error: {0}")]
    Enrichment(#[from] EnrichError),

    /// Another analysis run is already in flight.
    #[error("an analysis is already running")]
    Busy,

    /// Fallback for failures outside the taxonomy.
    #[error("unexpected error: {0}")]
    Unknown(String),
}
