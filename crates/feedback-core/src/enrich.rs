//! The enrichment interface and the AI-derived result types.
//!
//! An [`Enricher`] turns a set of feedback records into sentiment counts,
//! improvement suggestions, and positive highlights. Implementations live
//! in their own crates (`gemini-enricher` for the real backend,
//! `mock-enricher` for test doubles); the dashboard only ever sees this
//! trait.

use crate::record::{FeedbackRecord, Language};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Most suggestions a single analysis reports.
pub const MAX_SUGGESTIONS: usize = 5;

/// Most positive highlights a single analysis reports.
pub const MAX_HIGHLIGHTS: usize = 3;

/// Errors that can occur while producing enrichment results.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// Request to the model backend failed in transit
    #[error("enrichment request failed: {0}")]
    Network(String),

    /// The backend answered but its output was unusable
    #[error("model response unusable: {0}")]
    Generation(String),

    /// The enricher itself is misconfigured
    #[error("enricher configuration error: {0}")]
    Configuration(String),
}

/// Sentiment counts across all free-text comments.
///
/// Deserialization is strict: a model payload missing any of the three
/// fields is rejected, which surfaces as [`EnrichError::Generation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentTally {
    /// Comments with positive sentiment.
    pub positive: u32,
    /// Comments with neutral or mixed sentiment.
    pub neutral: u32,
    /// Comments with negative sentiment.
    pub negative: u32,
}

/// One actionable improvement derived from a customer comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// The customer comment the suggestion responds to.
    pub original_comment: String,
    /// The recommended action, in the display language.
    pub suggestion: String,
}

/// One standout promoter comment with the model's reading of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositiveHighlight {
    /// The promoter's own words.
    pub positive_comment: String,
    /// The NPS score attached to the comment. Kept as a float because the
    /// model echoes it back as a JSON number.
    pub nps_score: f64,
    /// Why the comment stands out, in the display language.
    pub reason: String,
}

/// Interface for AI enrichment backends.
///
/// Sentiment is language-agnostic (it only counts); suggestions and
/// highlights are generated in the requested display language, so a
/// language change re-runs those two operations but not sentiment.
#[async_trait]
pub trait Enricher: Send + Sync {
    /// Classify every free-text comment and tally the sentiment.
    async fn sentiment(&self, records: &[FeedbackRecord]) -> Result<SentimentTally, EnrichError>;

    /// Derive up to [`MAX_SUGGESTIONS`] improvement suggestions from the
    /// improvement-oriented comments.
    async fn suggestions(
        &self,
        records: &[FeedbackRecord],
        language: Language,
    ) -> Result<Vec<Suggestion>, EnrichError>;

    /// Pick up to [`MAX_HIGHLIGHTS`] standout promoter comments.
    async fn highlights(
        &self,
        records: &[FeedbackRecord],
        language: Language,
    ) -> Result<Vec<PositiveHighlight>, EnrichError>;

    /// Name of this enricher implementation.
    fn name(&self) -> &str;
}
