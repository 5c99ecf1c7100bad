//! Core types and pure analytics for the Pulso feedback dashboard.
//!
//! This crate provides the shared vocabulary for the Pulso crates. It
//! defines:
//!
//! - [`FeedbackRecord`] / [`Language`] - one survey response and the
//!   supported display languages
//! - [`MetricsSummary`] / [`compute_metrics`] - NPS and CSAT computation
//! - [`DateRange`] / [`filter_by_date`] - calendar-date filtering of records
//! - [`Enricher`] - the trait AI enrichment backends implement
//! - [`EnrichError`] - error type for enrichment operations
//!
//! # Example
//!
//! ```rust
//! use feedback_core::{compute_metrics, FeedbackRecord};
//!
//! let records = vec![
//!     FeedbackRecord { nps: 9, date: "01/03/2024".to_string(), ..Default::default() },
//!     FeedbackRecord { nps: 3, date: "02/03/2024".to_string(), ..Default::default() },
//! ];
//!
//! let summary = compute_metrics(&records);
//! assert_eq!(summary.nps.promoters, 1);
//! assert_eq!(summary.nps.detractors, 1);
//! assert_eq!(summary.nps.score, 0);
//! ```

mod enrich;
mod filter;
mod metrics;
mod prompt;
mod record;

pub use enrich::{
    EnrichError, Enricher, PositiveHighlight, SentimentTally, Suggestion, MAX_HIGHLIGHTS,
    MAX_SUGGESTIONS,
};
pub use filter::{filter_by_date, record_date, DateRange};
pub use metrics::{compute_metrics, csat_percentage, CsatBreakdown, MetricsSummary, NpsBreakdown};
pub use prompt::{combined_feedback_text, hash_prompt, highlight_records, improvement_records};
pub use record::{FeedbackRecord, Language};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
