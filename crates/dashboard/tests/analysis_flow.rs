//! Integration tests for the dashboard state machine.
//!
//! These tests drive the full analyze / language-change lifecycle against
//! in-memory sources and mock enrichers. No network access is required.
//!
//! Run with:
//!   cargo test --test analysis_flow

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use dashboard::{
    AnalysisError, Dashboard, DateRange, FailingSource, FeedbackRecord, FixtureSource, Language,
    Phase,
};
use feedback_core::{
    async_trait, EnrichError, Enricher, PositiveHighlight, SentimentTally, Suggestion,
};
use mock_enricher::{DelayedEnricher, FailingEnricher, FixedEnricher, RecordingEnricher};

/// Four records spanning March 2024: two promoters, one passive, one
/// detractor. NPS score: round((2 - 1) / 4 * 100) = 25.
fn sample_records() -> Vec<FeedbackRecord> {
    vec![
        FeedbackRecord {
            csat_service: 5,
            csat_delivery: 4,
            csat_platform: 5,
            why_us: "El soporte respondió en minutos.".to_string(),
            nps: 9,
            date: "01/03/2024 10:15:00".to_string(),
            ..FeedbackRecord::default()
        },
        FeedbackRecord {
            csat_service: 4,
            csat_delivery: 2,
            csat_platform: 3,
            why_us: "Entrega muy rápida.".to_string(),
            nps: 9,
            what_better: "La app podría recordar mis pedidos.".to_string(),
            date: "10/03/2024".to_string(),
            ..FeedbackRecord::default()
        },
        FeedbackRecord {
            csat_service: 2,
            csat_delivery: 1,
            csat_platform: 2,
            nps: 3,
            what_better: "El envío tardó demasiado.".to_string(),
            date: "20/03/2024".to_string(),
            ..FeedbackRecord::default()
        },
        FeedbackRecord {
            csat_delivery: 4,
            csat_platform: 4,
            why_us: "Buena plataforma.".to_string(),
            nps: 7,
            wow_ideas: "Quizás un programa de puntos.".to_string(),
            date: "31/03/2024".to_string(),
            ..FeedbackRecord::default()
        },
    ]
}

fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).unwrap()
}

fn sample_dashboard() -> Dashboard<FixtureSource, FixedEnricher> {
    Dashboard::new(FixtureSource::new(sample_records()), FixedEnricher::sample())
}

// ============================================================================
// Analyze: happy path
// ============================================================================

mod analyze_tests {
    use super::*;

    #[tokio::test]
    async fn test_first_analysis_reaches_ready() {
        let dashboard = sample_dashboard();

        let snapshot = dashboard
            .analyze(DateRange::default(), Language::Es)
            .await
            .unwrap();

        assert_eq!(snapshot.phase, Phase::Ready);
        assert!(snapshot.data_loaded);
        assert_eq!(snapshot.record_count, 4);
        assert!(snapshot.error.is_none());

        let metrics = snapshot.metrics.unwrap();
        assert_eq!(metrics.nps.score, 25);
        assert_eq!(metrics.nps.promoters, 2);
        assert_eq!(metrics.nps.passives, 1);
        assert_eq!(metrics.nps.detractors, 1);
        assert_eq!(metrics.nps.total, 4);
        assert_eq!(metrics.csat.service, 67);
        assert_eq!(metrics.csat.delivery, 50);
        assert_eq!(metrics.csat.platform, 50);

        let sentiment = snapshot.sentiment.unwrap();
        assert_eq!(sentiment.positive, 2);
        assert_eq!(sentiment.neutral, 1);
        assert_eq!(sentiment.negative, 1);

        assert_eq!(snapshot.suggestions.unwrap().len(), 1);
        assert_eq!(snapshot.highlights.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_action_label_flips_to_refresh_after_load() {
        let dashboard = sample_dashboard();
        assert_eq!(dashboard.snapshot().await.action_label, "Analizar");

        let snapshot = dashboard
            .analyze(DateRange::default(), Language::Es)
            .await
            .unwrap();
        assert_eq!(snapshot.action_label, "Actualizar");
    }

    #[tokio::test]
    async fn test_date_window_restricts_the_record_set() {
        let dashboard = sample_dashboard();
        let range = DateRange::new(Some(day(2024, 3, 5)), Some(day(2024, 3, 25)));

        let snapshot = dashboard.analyze(range, Language::Es).await.unwrap();

        // Only the 10/03 promoter and the 20/03 detractor fall inside.
        assert_eq!(snapshot.record_count, 2);
        let metrics = snapshot.metrics.unwrap();
        assert_eq!(metrics.nps.total, 2);
        assert_eq!(metrics.nps.score, 0);
    }

    #[tokio::test]
    async fn test_snapshot_serializes_camel_case() {
        let dashboard = sample_dashboard();
        let snapshot = dashboard
            .analyze(DateRange::default(), Language::Es)
            .await
            .unwrap();

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["phase"], "ready");
        assert_eq!(json["language"], "es");
        assert_eq!(json["dataLoaded"], true);
        assert_eq!(json["recordCount"], 4);
        assert_eq!(json["metrics"]["nps"]["score"], 25);
        assert_eq!(json["metrics"]["csat"]["service"], 67);
        assert_eq!(json["sentiment"]["positive"], 2);
        assert_eq!(
            json["suggestions"][0]["originalComment"],
            "Shipping took two weeks"
        );
        assert_eq!(json["highlights"][0]["npsScore"], 10.0);
    }
}

// ============================================================================
// Analyze: failure paths
// ============================================================================

mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_inverted_range_fails_without_fetching() {
        let source = FixtureSource::new(sample_records());
        let probe = source.clone();
        let dashboard = Dashboard::new(source, FixedEnricher::sample());
        let range = DateRange::new(Some(day(2024, 3, 25)), Some(day(2024, 3, 5)));

        let error = dashboard.analyze(range, Language::Es).await.unwrap_err();

        assert!(matches!(error, AnalysisError::DateRange));
        assert_eq!(probe.load_count(), 0);

        let snapshot = dashboard.snapshot().await;
        assert_eq!(snapshot.phase, Phase::Error);
        assert_eq!(
            snapshot.error.as_deref(),
            Some("La fecha de inicio no puede ser posterior a la fecha de fin.")
        );
    }

    #[tokio::test]
    async fn test_empty_filter_is_a_no_data_error() {
        let dashboard = sample_dashboard();
        let range = DateRange::new(Some(day(2025, 1, 1)), Some(day(2025, 12, 31)));

        let error = dashboard.analyze(range, Language::Es).await.unwrap_err();

        assert!(matches!(error, AnalysisError::NoData));
        let snapshot = dashboard.snapshot().await;
        assert_eq!(snapshot.phase, Phase::Error);
        assert!(!snapshot.data_loaded);
        assert_eq!(
            snapshot.error.as_deref(),
            Some("No se encontraron respuestas en el rango de fechas seleccionado.")
        );
    }

    #[tokio::test]
    async fn test_source_failure_shows_the_source_banner() {
        let dashboard = Dashboard::new(FailingSource, FixedEnricher::sample());

        let error = dashboard
            .analyze(DateRange::default(), Language::Pt)
            .await
            .unwrap_err();

        assert!(matches!(error, AnalysisError::Source(_)));
        let snapshot = dashboard.snapshot().await;
        assert_eq!(snapshot.phase, Phase::Error);
        assert_eq!(
            snapshot.error.as_deref(),
            Some("Não foi possível obter ou processar a planilha. Verifique a URL e as permissões de acesso.")
        );
    }

    #[tokio::test]
    async fn test_enrichment_failure_keeps_metrics_but_not_data_loaded() {
        let dashboard =
            Dashboard::new(FixtureSource::new(sample_records()), FailingEnricher::new());

        let error = dashboard
            .analyze(DateRange::default(), Language::Es)
            .await
            .unwrap_err();

        assert!(matches!(error, AnalysisError::Enrichment(_)));
        let snapshot = dashboard.snapshot().await;
        assert_eq!(snapshot.phase, Phase::Error);
        assert!(!snapshot.data_loaded);
        // Metrics were computed and stored before the enrichment batch ran.
        assert_eq!(snapshot.metrics.unwrap().nps.score, 25);
        assert_eq!(snapshot.record_count, 4);
        assert!(snapshot.sentiment.is_none());
        assert_eq!(
            snapshot.error.as_deref(),
            Some("El análisis con IA falló. Inténtalo de nuevo más tarde.")
        );
    }
}

// ============================================================================
// The clear-on-next-run asymmetry
// ============================================================================

mod asymmetry_tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_reanalysis_keeps_the_previous_dashboard() {
        let dashboard = sample_dashboard();
        dashboard
            .analyze(DateRange::default(), Language::Es)
            .await
            .unwrap();

        // A reload over an empty window fails, but the previous results stay
        // visible under the banner.
        let range = DateRange::new(Some(day(2025, 1, 1)), Some(day(2025, 12, 31)));
        let error = dashboard.analyze(range, Language::Es).await.unwrap_err();
        assert!(matches!(error, AnalysisError::NoData));

        let snapshot = dashboard.snapshot().await;
        assert_eq!(snapshot.phase, Phase::Error);
        assert!(!snapshot.data_loaded);
        assert_eq!(snapshot.record_count, 4);
        assert_eq!(snapshot.metrics.unwrap().nps.score, 25);
        assert!(snapshot.sentiment.is_some());
        assert!(snapshot.suggestions.is_some());
        assert!(snapshot.highlights.is_some());
    }

    #[tokio::test]
    async fn test_stale_results_clear_at_the_start_of_the_next_run() {
        let dashboard = sample_dashboard();
        dashboard
            .analyze(DateRange::default(), Language::Es)
            .await
            .unwrap();

        let empty = DateRange::new(Some(day(2025, 1, 1)), Some(day(2025, 12, 31)));
        dashboard.analyze(empty, Language::Es).await.unwrap_err();

        // data_loaded dropped above, so the next run clears the stale slots
        // at entry, even though it fails on its own range check.
        let inverted = DateRange::new(Some(day(2024, 3, 25)), Some(day(2024, 3, 5)));
        dashboard.analyze(inverted, Language::Es).await.unwrap_err();

        let snapshot = dashboard.snapshot().await;
        assert_eq!(snapshot.record_count, 0);
        assert!(snapshot.metrics.is_none());
        assert!(snapshot.sentiment.is_none());
        assert!(snapshot.suggestions.is_none());
        assert!(snapshot.highlights.is_none());
        assert_eq!(snapshot.phase, Phase::Error);
    }

    #[tokio::test]
    async fn test_inverted_range_after_success_keeps_data_loaded() {
        let source = FixtureSource::new(sample_records());
        let probe = source.clone();
        let dashboard = Dashboard::new(source, FixedEnricher::sample());
        dashboard
            .analyze(DateRange::default(), Language::Es)
            .await
            .unwrap();

        let inverted = DateRange::new(Some(day(2024, 3, 25)), Some(day(2024, 3, 5)));
        let error = dashboard.analyze(inverted, Language::Es).await.unwrap_err();
        assert!(matches!(error, AnalysisError::DateRange));

        let snapshot = dashboard.snapshot().await;
        assert_eq!(snapshot.phase, Phase::Error);
        assert!(snapshot.data_loaded);
        assert_eq!(snapshot.action_label, "Actualizar");
        assert_eq!(snapshot.metrics.unwrap().nps.score, 25);
        assert_eq!(probe.load_count(), 1);
    }
}

// ============================================================================
// Language changes
// ============================================================================

mod language_tests {
    use super::*;

    /// Delegates to a fixed enricher until tripped, then fails every call.
    struct TrippableEnricher {
        inner: FixedEnricher,
        tripped: Arc<AtomicBool>,
    }

    #[async_trait]
    impl Enricher for TrippableEnricher {
        async fn sentiment(
            &self,
            records: &[FeedbackRecord],
        ) -> Result<SentimentTally, EnrichError> {
            if self.tripped.load(Ordering::SeqCst) {
                return Err(EnrichError::Network("tripped".to_string()));
            }
            self.inner.sentiment(records).await
        }

        async fn suggestions(
            &self,
            records: &[FeedbackRecord],
            language: Language,
        ) -> Result<Vec<Suggestion>, EnrichError> {
            if self.tripped.load(Ordering::SeqCst) {
                return Err(EnrichError::Network("tripped".to_string()));
            }
            self.inner.suggestions(records, language).await
        }

        async fn highlights(
            &self,
            records: &[FeedbackRecord],
            language: Language,
        ) -> Result<Vec<PositiveHighlight>, EnrichError> {
            if self.tripped.load(Ordering::SeqCst) {
                return Err(EnrichError::Network("tripped".to_string()));
            }
            self.inner.highlights(records, language).await
        }

        fn name(&self) -> &str {
            "TrippableEnricher"
        }
    }

    #[tokio::test]
    async fn test_language_change_before_any_load_only_records() {
        let enricher = RecordingEnricher::new(FixedEnricher::sample());
        let counts = enricher.counts();
        let dashboard = Dashboard::new(FixtureSource::new(vec![]), enricher);

        let snapshot = dashboard.change_language(Language::Pt).await.unwrap();

        assert_eq!(snapshot.language, Language::Pt);
        assert_eq!(snapshot.phase, Phase::Idle);
        assert_eq!(snapshot.action_label, "Analisar");
        assert_eq!(counts.total(), 0);
    }

    #[tokio::test]
    async fn test_language_change_reissues_only_suggestions_and_highlights() {
        let source = FixtureSource::new(sample_records());
        let probe = source.clone();
        let enricher = RecordingEnricher::new(FixedEnricher::sample());
        let counts = enricher.counts();
        let dashboard = Dashboard::new(source, enricher);

        dashboard
            .analyze(DateRange::default(), Language::Es)
            .await
            .unwrap();
        assert_eq!(counts.sentiment(), 1);
        assert_eq!(counts.suggestions(), 1);
        assert_eq!(counts.highlights(), 1);

        let snapshot = dashboard.change_language(Language::Pt).await.unwrap();

        assert_eq!(snapshot.phase, Phase::Ready);
        assert_eq!(snapshot.language, Language::Pt);
        assert_eq!(counts.sentiment(), 1);
        assert_eq!(counts.suggestions(), 2);
        assert_eq!(counts.highlights(), 2);
        // The stored record set is reused; the sheet is not fetched again.
        assert_eq!(probe.load_count(), 1);
    }

    #[tokio::test]
    async fn test_selecting_the_current_language_is_a_noop() {
        let enricher = RecordingEnricher::new(FixedEnricher::sample());
        let counts = enricher.counts();
        let dashboard = Dashboard::new(FixtureSource::new(sample_records()), enricher);

        dashboard
            .analyze(DateRange::default(), Language::Es)
            .await
            .unwrap();
        dashboard.change_language(Language::Es).await.unwrap();

        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_entries() {
        let tripped = Arc::new(AtomicBool::new(false));
        let enricher = TrippableEnricher {
            inner: FixedEnricher::sample(),
            tripped: tripped.clone(),
        };
        let dashboard = Dashboard::new(FixtureSource::new(sample_records()), enricher);

        dashboard
            .analyze(DateRange::default(), Language::Es)
            .await
            .unwrap();
        tripped.store(true, Ordering::SeqCst);

        let error = dashboard.change_language(Language::Pt).await.unwrap_err();
        assert!(matches!(error, AnalysisError::Enrichment(_)));

        let snapshot = dashboard.snapshot().await;
        assert_eq!(snapshot.phase, Phase::Error);
        assert_eq!(snapshot.language, Language::Pt);
        assert_eq!(
            snapshot.error.as_deref(),
            Some("Não foi possível atualizar as sugestões.")
        );
        // The entries from the successful run stay displayed and the load
        // flag is untouched by a refresh failure.
        assert_eq!(snapshot.suggestions.unwrap().len(), 1);
        assert_eq!(snapshot.highlights.unwrap().len(), 1);
        assert!(snapshot.data_loaded);
    }

    #[tokio::test]
    async fn test_refresh_runs_after_partial_failure_with_stored_records() {
        // An enrichment failure leaves the fetched records and metrics in
        // place, so a later language change still refreshes against them.
        let dashboard =
            Dashboard::new(FixtureSource::new(sample_records()), FailingEnricher::new());
        dashboard
            .analyze(DateRange::default(), Language::Es)
            .await
            .unwrap_err();

        let error = dashboard.change_language(Language::Pt).await.unwrap_err();
        assert!(matches!(error, AnalysisError::Enrichment(_)));

        let snapshot = dashboard.snapshot().await;
        assert_eq!(
            snapshot.error.as_deref(),
            Some("Não foi possível atualizar as sugestões.")
        );
    }
}

// ============================================================================
// Concurrency
// ============================================================================

mod concurrency_tests {
    use super::*;

    #[tokio::test]
    async fn test_second_analysis_while_loading_is_busy() {
        let source = FixtureSource::new(sample_records());
        let probe = source.clone();
        let enricher = DelayedEnricher::new(FixedEnricher::sample(), Duration::from_millis(300));
        let dashboard = Arc::new(Dashboard::new(source, enricher));

        let background = {
            let dashboard = dashboard.clone();
            tokio::spawn(async move { dashboard.analyze(DateRange::default(), Language::Es).await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;

        let error = dashboard
            .analyze(DateRange::default(), Language::Es)
            .await
            .unwrap_err();
        assert!(matches!(error, AnalysisError::Busy));

        // The busy rejection neither fetches nor touches the banner.
        let snapshot = dashboard.snapshot().await;
        assert_eq!(snapshot.phase, Phase::Loading);
        assert!(snapshot.error.is_none());

        let result = background.await.unwrap();
        assert_eq!(result.unwrap().phase, Phase::Ready);
        assert_eq!(probe.load_count(), 1);
    }

    #[tokio::test]
    async fn test_language_change_while_loading_records_without_refresh() {
        let enricher = RecordingEnricher::new(DelayedEnricher::new(
            FixedEnricher::sample(),
            Duration::from_millis(300),
        ));
        let counts = enricher.counts();
        let dashboard = Arc::new(Dashboard::new(FixtureSource::new(sample_records()), enricher));

        let background = {
            let dashboard = dashboard.clone();
            tokio::spawn(async move { dashboard.analyze(DateRange::default(), Language::Es).await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;

        let snapshot = dashboard.change_language(Language::Pt).await.unwrap();
        assert_eq!(snapshot.language, Language::Pt);
        assert_eq!(snapshot.phase, Phase::Loading);

        background.await.unwrap().unwrap();

        // Only the in-flight run called the enricher; the language change
        // issued nothing while a load was in progress.
        assert_eq!(counts.sentiment(), 1);
        assert_eq!(counts.suggestions(), 1);
        assert_eq!(counts.highlights(), 1);
        assert_eq!(dashboard.language().await, Language::Pt);
    }
}
