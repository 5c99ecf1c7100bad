//! Failing enricher implementation - every call errors.

use async_trait::async_trait;
use feedback_core::{
    EnrichError, Enricher, FeedbackRecord, Language, PositiveHighlight, SentimentTally, Suggestion,
};

/// An enricher whose every call fails.
///
/// Useful for exercising the error paths of the analysis flow.
#[derive(Debug, Clone)]
pub struct FailingEnricher {
    message: String,
}

impl FailingEnricher {
    /// Create a FailingEnricher with a default failure message.
    pub fn new() -> Self {
        Self::with_message("mock enrichment failure")
    }

    /// Create a FailingEnricher with a custom failure message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn error(&self) -> EnrichError {
        EnrichError::Network(self.message.clone())
    }
}

impl Default for FailingEnricher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Enricher for FailingEnricher {
    async fn sentiment(&self, _records: &[FeedbackRecord]) -> Result<SentimentTally, EnrichError> {
        Err(self.error())
    }

    async fn suggestions(
        &self,
        _records: &[FeedbackRecord],
        _language: Language,
    ) -> Result<Vec<Suggestion>, EnrichError> {
        Err(self.error())
    }

    async fn highlights(
        &self,
        _records: &[FeedbackRecord],
        _language: Language,
    ) -> Result<Vec<PositiveHighlight>, EnrichError> {
        Err(self.error())
    }

    fn name(&self) -> &str {
        "FailingEnricher"
    }
}
