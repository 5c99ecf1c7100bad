//! Mock enricher implementations for testing the Pulso analysis flow.
//!
//! This crate provides test doubles for the `Enricher` trait:
//! - `FixedEnricher` - returns canned results
//! - `FailingEnricher` - always fails
//! - `DelayedEnricher` - wraps another enricher with artificial delay
//! - `RecordingEnricher` - wraps another enricher and counts calls
//!
//! For real enrichment, use the `gemini-enricher` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_enricher::{Enricher, FixedEnricher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_enricher::EnrichError> {
//!     let enricher = FixedEnricher::sample();
//!
//!     let tally = enricher.sentiment(&[]).await?;
//!     assert!(tally.positive > 0);
//!     Ok(())
//! }
//! ```

mod delayed;
mod failing;
mod fixed;
mod recording;

// Re-export core types for convenience
pub use feedback_core::{
    async_trait, EnrichError, Enricher, FeedbackRecord, Language, PositiveHighlight,
    SentimentTally, Suggestion,
};

// Export mock implementations
pub use delayed::DelayedEnricher;
pub use failing::FailingEnricher;
pub use fixed::FixedEnricher;
pub use recording::{CallCounts, RecordingEnricher};
