//! Delayed enricher implementation - adds artificial latency.

use async_trait::async_trait;
use feedback_core::{
    EnrichError, Enricher, FeedbackRecord, Language, PositiveHighlight, SentimentTally, Suggestion,
};
use std::time::Duration;

/// An enricher that waits before delegating to an inner enricher.
///
/// Useful for exercising the loading phase and the in-flight guard.
#[derive(Debug, Clone)]
pub struct DelayedEnricher<E> {
    inner: E,
    delay: Duration,
}

impl<E> DelayedEnricher<E> {
    /// Wrap `inner`, delaying every call by `delay`.
    pub fn new(inner: E, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl<E: Enricher> Enricher for DelayedEnricher<E> {
    async fn sentiment(&self, records: &[FeedbackRecord]) -> Result<SentimentTally, EnrichError> {
        tokio::time::sleep(self.delay).await;
        self.inner.sentiment(records).await
    }

    async fn suggestions(
        &self,
        records: &[FeedbackRecord],
        language: Language,
    ) -> Result<Vec<Suggestion>, EnrichError> {
        tokio::time::sleep(self.delay).await;
        self.inner.suggestions(records, language).await
    }

    async fn highlights(
        &self,
        records: &[FeedbackRecord],
        language: Language,
    ) -> Result<Vec<PositiveHighlight>, EnrichError> {
        tokio::time::sleep(self.delay).await;
        self.inner.highlights(records, language).await
    }

    fn name(&self) -> &str {
        "DelayedEnricher"
    }
}
