//! The analysis state machine behind the feedback dashboard.

use feedback_core::{compute_metrics, filter_by_date, DateRange, Enricher, Language};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::AnalysisError;
use crate::localization;
use crate::source::RecordSource;
use crate::state::{DashboardState, Phase, Snapshot};

/// Coordinates ingestion, date filtering, metrics, and AI enrichment behind
/// one shared state.
///
/// At most one operation mutates the state at a time: `analyze` rejects
/// re-entry with [`AnalysisError::Busy`] while a run is in flight, and a
/// language change during a run only records the new language.
///
/// Two asymmetries are deliberate and mirror the product's UX contract:
///
/// - Result slots are cleared at the *start* of an analysis run, and only
///   when no prior successful load exists. A failed re-analysis therefore
///   keeps the previous dashboard visible under the error banner until the
///   next run begins.
/// - A failed suggestions/highlights refresh after a language change
///   reports its banner but leaves the previously displayed entries alone.
pub struct Dashboard<S: RecordSource, E: Enricher> {
    source: S,
    enricher: E,
    state: RwLock<DashboardState>,
}

impl<S: RecordSource, E: Enricher> Dashboard<S, E> {
    /// Create a dashboard over the given source and enricher, starting in
    /// the idle phase with the default language.
    pub fn new(source: S, enricher: E) -> Self {
        Self {
            source,
            enricher,
            state: RwLock::new(DashboardState::default()),
        }
    }

    /// Current serialized view of the dashboard.
    pub async fn snapshot(&self) -> Snapshot {
        self.state.read().await.snapshot()
    }

    /// Currently selected language.
    pub async fn language(&self) -> Language {
        self.state.read().await.language
    }

    /// Run one full analysis pass: fetch, filter, compute metrics, then
    /// request sentiment, suggestions, and highlights concurrently.
    ///
    /// On success the returned snapshot is in the `ready` phase. On failure
    /// the state carries a localized banner and the error is returned;
    /// callers that only render the dashboard can keep using [`snapshot`].
    ///
    /// [`snapshot`]: Dashboard::snapshot
    pub async fn analyze(
        &self,
        range: DateRange,
        language: Language,
    ) -> Result<Snapshot, AnalysisError> {
        {
            let mut state = self.state.write().await;
            if state.phase == Phase::Loading {
                debug!("analysis already in flight, rejecting");
                return Err(AnalysisError::Busy);
            }
            state.phase = Phase::Loading;
            state.language = language;
            state.error = None;
            if !state.data_loaded {
                state.clear_results();
            }
        }

        // The range check happens before any network call. It does not touch
        // data_loaded, so an inverted range after a successful load keeps the
        // previous dashboard.
        if range.is_inverted() {
            warn!("rejected inverted date range");
            let mut state = self.state.write().await;
            state.phase = Phase::Error;
            state.error =
                Some(localization::error_banner(&AnalysisError::DateRange, language).to_string());
            return Err(AnalysisError::DateRange);
        }

        match self.run_analysis(&range, language).await {
            Ok(snapshot) => {
                info!(records = snapshot.record_count, "analysis complete");
                Ok(snapshot)
            }
            Err(error) => {
                warn!("analysis failed: {}", error);
                let mut state = self.state.write().await;
                state.phase = Phase::Error;
                state.error = Some(localization::error_banner(&error, language).to_string());
                state.data_loaded = false;
                Err(error)
            }
        }
    }

    async fn run_analysis(
        &self,
        range: &DateRange,
        language: Language,
    ) -> Result<Snapshot, AnalysisError> {
        let records = self.source.load().await?;
        let filtered = filter_by_date(&records, range);
        debug!(fetched = records.len(), kept = filtered.len(), "records filtered");
        if filtered.is_empty() {
            return Err(AnalysisError::NoData);
        }

        let metrics = compute_metrics(&filtered);
        info!(records = filtered.len(), nps = metrics.nps.score, "metrics computed");

        // The filtered set and metrics are stored before enrichment; a late
        // enrichment failure keeps the already-computed numbers in place.
        {
            let mut state = self.state.write().await;
            state.records = filtered.clone();
            state.metrics = Some(metrics);
        }

        let (sentiment, suggestions, highlights) = tokio::try_join!(
            self.enricher.sentiment(&filtered),
            self.enricher.suggestions(&filtered, language),
            self.enricher.highlights(&filtered, language),
        )?;

        let mut state = self.state.write().await;
        state.sentiment = Some(sentiment);
        state.suggestions = Some(suggestions);
        state.highlights = Some(highlights);
        state.data_loaded = true;
        state.phase = Phase::Ready;
        Ok(state.snapshot())
    }

    /// Switch the display language.
    ///
    /// When a successful load is present and no operation is in flight,
    /// suggestions and highlights are re-requested in the new language
    /// against the stored record set; metrics and sentiment are
    /// language-agnostic and stay as they are. Otherwise the language is
    /// recorded and nothing else happens.
    pub async fn change_language(&self, language: Language) -> Result<Snapshot, AnalysisError> {
        let records = {
            let mut state = self.state.write().await;
            if state.language == language {
                debug!(language = %language, "language unchanged");
                return Ok(state.snapshot());
            }
            state.language = language;
            if state.phase == Phase::Loading || state.records.is_empty() {
                debug!(language = %language, "language recorded without refresh");
                return Ok(state.snapshot());
            }
            state.phase = Phase::Loading;
            state.records.clone()
        };

        info!(language = %language, "refreshing suggestions and highlights");
        let result = tokio::try_join!(
            self.enricher.suggestions(&records, language),
            self.enricher.highlights(&records, language),
        );

        let mut state = self.state.write().await;
        match result {
            Ok((suggestions, highlights)) => {
                state.suggestions = Some(suggestions);
                state.highlights = Some(highlights);
                // A banner from an earlier failed run is not cleared here;
                // only the two refreshed slots change.
                state.phase = if state.error.is_some() {
                    Phase::Error
                } else {
                    Phase::Ready
                };
                Ok(state.snapshot())
            }
            Err(error) => {
                warn!("language refresh failed: {}", error);
                state.phase = Phase::Error;
                state.error = Some(localization::refresh_banner(language).to_string());
                Err(AnalysisError::Enrichment(error))
            }
        }
    }
}
