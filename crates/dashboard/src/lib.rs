//! Analysis state machine for the customer feedback dashboard.
//!
//! This crate provides the [`Dashboard`] type, which coordinates spreadsheet
//! ingestion, date filtering, metric computation, and AI enrichment behind a
//! single shared state that the HTTP API and the report tool render.
//!
//! # Lifecycle
//!
//! ```text
//!            analyze
//!   idle ──────────────→ loading ──────────→ ready
//!                          ↑   │               │
//!                          │   └──→ error      │  re-analyze /
//!                          │          │        │  language change
//!                          └──────────┴────────┘
//! ```
//!
//! A failed run leaves a localized error banner in the state. Previously
//! displayed results are only cleared at the start of the next run, and only
//! when the last fully successful load has been invalidated, so a transient
//! failure never blanks an already-rendered dashboard.
//!
//! # Example
//!
//! ```rust,ignore
//! use dashboard::{Dashboard, DateRange, Language};
//! use gemini_enricher::GeminiEnricher;
//! use sheet_ingest::SheetClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = SheetClient::from_env()?;
//!     let enricher = GeminiEnricher::from_env()?;
//!     let dashboard = Dashboard::new(source, enricher);
//!
//!     let snapshot = dashboard
//!         .analyze(DateRange::default(), Language::Es)
//!         .await?;
//!     if let Some(metrics) = &snapshot.metrics {
//!         println!("NPS: {}", metrics.nps.score);
//!     }
//!     Ok(())
//! }
//! ```

mod dashboard;
mod error;
mod localization;
mod source;
mod state;

// Public exports
pub use crate::dashboard::Dashboard;
pub use error::AnalysisError;
pub use localization::{action_label, error_banner, refresh_banner, Catalog};
pub use source::{FailingSource, FixtureSource, RecordSource};
pub use state::{Phase, Snapshot};

// Re-export commonly used types from dependencies
pub use feedback_core::{
    CsatBreakdown, DateRange, Enricher, FeedbackRecord, Language, MetricsSummary, NpsBreakdown,
    PositiveHighlight, SentimentTally, Suggestion,
};
pub use sheet_ingest::{IngestError, SheetClient};
