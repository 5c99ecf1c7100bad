//! Dashboard state and its serialized snapshot.

use feedback_core::{
    FeedbackRecord, Language, MetricsSummary, PositiveHighlight, SentimentTally, Suggestion,
};
use serde::Serialize;

use crate::localization;

/// Lifecycle phase of the dashboard.
///
/// `ready` is re-entered through `loading` on every re-analysis or
/// language change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No analysis has been requested yet.
    #[default]
    Idle,
    /// A load or refresh is in flight.
    Loading,
    /// The last operation succeeded and results are displayed.
    Ready,
    /// The last operation failed; `error` holds the banner.
    Error,
}

/// Mutable dashboard state, guarded by the service lock.
///
/// Result slots are `None` until the corresponding step has produced them.
/// An empty suggestion or highlight list is a real result, distinct from a
/// slot that was never filled.
#[derive(Debug, Clone, Default)]
pub(crate) struct DashboardState {
    pub phase: Phase,
    pub language: Language,
    /// Set only by a fully successful analysis run. Drives slot clearing on
    /// the next run and the analyze/refresh label.
    pub data_loaded: bool,
    /// The filtered record set of the last run that got past the filter.
    /// Language changes re-enrich this set without re-fetching.
    pub records: Vec<FeedbackRecord>,
    pub metrics: Option<MetricsSummary>,
    pub sentiment: Option<SentimentTally>,
    pub suggestions: Option<Vec<Suggestion>>,
    pub highlights: Option<Vec<PositiveHighlight>>,
    /// Localized banner text for the last failure, if any.
    pub error: Option<String>,
}

impl DashboardState {
    /// Empty every result slot. Used at the start of an analysis run when
    /// no prior successful load exists.
    pub fn clear_results(&mut self) {
        self.records.clear();
        self.metrics = None;
        self.sentiment = None;
        self.suggestions = None;
        self.highlights = None;
    }

    /// Point-in-time serialized view of this state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            language: self.language,
            data_loaded: self.data_loaded,
            record_count: self.records.len(),
            action_label: localization::action_label(self.data_loaded, self.language),
            metrics: self.metrics.clone(),
            sentiment: self.sentiment,
            suggestions: self.suggestions.clone(),
            highlights: self.highlights.clone(),
            error: self.error.clone(),
        }
    }
}

/// Serialized view of the dashboard, as served over HTTP and printed by the
/// report tool.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub phase: Phase,
    pub language: Language,
    pub data_loaded: bool,
    /// Size of the filtered record set behind the current results.
    pub record_count: usize,
    /// Localized label for the analysis trigger (analyze or refresh).
    pub action_label: &'static str,
    pub metrics: Option<MetricsSummary>,
    pub sentiment: Option<SentimentTally>,
    pub suggestions: Option<Vec<Suggestion>>,
    pub highlights: Option<Vec<PositiveHighlight>>,
    /// Localized banner text when `phase` is `error`.
    pub error: Option<String>,
}
