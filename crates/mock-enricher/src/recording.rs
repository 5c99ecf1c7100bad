//! Recording enricher implementation - counts calls per capability.

use async_trait::async_trait;
use feedback_core::{
    EnrichError, Enricher, FeedbackRecord, Language, PositiveHighlight, SentimentTally, Suggestion,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared call counters for a [`RecordingEnricher`].
///
/// The counters stay readable after the enricher itself has been handed
/// off to the flow under test.
#[derive(Debug, Default)]
pub struct CallCounts {
    sentiment: AtomicUsize,
    suggestions: AtomicUsize,
    highlights: AtomicUsize,
}

impl CallCounts {
    /// Number of sentiment calls observed.
    pub fn sentiment(&self) -> usize {
        self.sentiment.load(Ordering::SeqCst)
    }

    /// Number of suggestions calls observed.
    pub fn suggestions(&self) -> usize {
        self.suggestions.load(Ordering::SeqCst)
    }

    /// Number of highlights calls observed.
    pub fn highlights(&self) -> usize {
        self.highlights.load(Ordering::SeqCst)
    }

    /// Total calls across all three capabilities.
    pub fn total(&self) -> usize {
        self.sentiment() + self.suggestions() + self.highlights()
    }
}

/// An enricher that counts calls before delegating to an inner enricher.
///
/// Useful for asserting which capabilities a flow exercised, e.g. that a
/// language change re-requests suggestions and highlights but never
/// re-runs sentiment.
#[derive(Debug, Clone)]
pub struct RecordingEnricher<E> {
    inner: E,
    counts: Arc<CallCounts>,
}

impl<E> RecordingEnricher<E> {
    /// Wrap `inner` with fresh counters.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            counts: Arc::new(CallCounts::default()),
        }
    }

    /// Get a handle to the shared counters.
    pub fn counts(&self) -> Arc<CallCounts> {
        Arc::clone(&self.counts)
    }
}

#[async_trait]
impl<E: Enricher> Enricher for RecordingEnricher<E> {
    async fn sentiment(&self, records: &[FeedbackRecord]) -> Result<SentimentTally, EnrichError> {
        self.counts.sentiment.fetch_add(1, Ordering::SeqCst);
        self.inner.sentiment(records).await
    }

    async fn suggestions(
        &self,
        records: &[FeedbackRecord],
        language: Language,
    ) -> Result<Vec<Suggestion>, EnrichError> {
        self.counts.suggestions.fetch_add(1, Ordering::SeqCst);
        self.inner.suggestions(records, language).await
    }

    async fn highlights(
        &self,
        records: &[FeedbackRecord],
        language: Language,
    ) -> Result<Vec<PositiveHighlight>, EnrichError> {
        self.counts.highlights.fetch_add(1, Ordering::SeqCst);
        self.inner.highlights(records, language).await
    }

    fn name(&self) -> &str {
        "RecordingEnricher"
    }
}
