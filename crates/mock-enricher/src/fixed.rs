//! Fixed enricher implementation - returns canned results.

use async_trait::async_trait;
use feedback_core::{
    EnrichError, Enricher, FeedbackRecord, Language, PositiveHighlight, SentimentTally, Suggestion,
};

/// An enricher that returns the same canned results on every call.
///
/// Useful for driving the analysis flow without any model behind it.
#[derive(Debug, Clone, Default)]
pub struct FixedEnricher {
    tally: SentimentTally,
    suggestions: Vec<Suggestion>,
    highlights: Vec<PositiveHighlight>,
}

impl FixedEnricher {
    /// Create a FixedEnricher returning zero counts and empty lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FixedEnricher with a small representative result set.
    pub fn sample() -> Self {
        Self {
            tally: SentimentTally {
                positive: 2,
                neutral: 1,
                negative: 1,
            },
            suggestions: vec![Suggestion {
                original_comment: "Shipping took two weeks".to_string(),
                suggestion: "Offer an express shipping tier".to_string(),
            }],
            highlights: vec![PositiveHighlight {
                positive_comment: "The support team is outstanding".to_string(),
                nps_score: 10.0,
                reason: "Support quality drives loyalty".to_string(),
            }],
        }
    }

    /// Set the canned sentiment tally.
    pub fn with_tally(mut self, tally: SentimentTally) -> Self {
        self.tally = tally;
        self
    }

    /// Set the canned suggestions.
    pub fn with_suggestions(mut self, suggestions: Vec<Suggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Set the canned highlights.
    pub fn with_highlights(mut self, highlights: Vec<PositiveHighlight>) -> Self {
        self.highlights = highlights;
        self
    }
}

#[async_trait]
impl Enricher for FixedEnricher {
    async fn sentiment(&self, _records: &[FeedbackRecord]) -> Result<SentimentTally, EnrichError> {
        Ok(self.tally)
    }

    async fn suggestions(
        &self,
        _records: &[FeedbackRecord],
        _language: Language,
    ) -> Result<Vec<Suggestion>, EnrichError> {
        Ok(self.suggestions.clone())
    }

    async fn highlights(
        &self,
        _records: &[FeedbackRecord],
        _language: Language,
    ) -> Result<Vec<PositiveHighlight>, EnrichError> {
        Ok(self.highlights.clone())
    }

    fn name(&self) -> &str {
        "FixedEnricher"
    }
}
