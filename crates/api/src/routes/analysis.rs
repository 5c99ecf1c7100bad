//! Dashboard snapshot, analyze, and language-change routes.

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use dashboard::{error_banner, AnalysisError, DateRange, Language, Snapshot};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Request to run an analysis pass.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Inclusive lower date bound, ISO `YYYY-MM-DD`. Empty or absent means
    /// no bound.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Inclusive upper date bound, ISO `YYYY-MM-DD`. Empty or absent means
    /// no bound.
    #[serde(default)]
    pub end_date: Option<String>,
    pub language: Language,
}

/// Request to switch the display language.
#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub language: Language,
}

/// Current dashboard snapshot.
pub async fn snapshot_api(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.dashboard.snapshot().await)
}

/// Run one analysis pass and answer with the resulting snapshot.
///
/// A failed run still answers `200`; the snapshot carries the localized
/// banner. Only a concurrent run is refused, with `409`.
pub async fn analyze_api(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<Snapshot>> {
    let range = DateRange::new(
        parse_date(req.start_date.as_deref(), "startDate")?,
        parse_date(req.end_date.as_deref(), "endDate")?,
    );

    match state.dashboard.analyze(range, req.language).await {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(AnalysisError::Busy) => Err(ApiError::Busy(
            error_banner(&AnalysisError::Busy, req.language).to_string(),
        )),
        Err(error) => {
            debug!("analysis failed: {}", error);
            Ok(Json(state.dashboard.snapshot().await))
        }
    }
}

/// Switch the display language and answer with the resulting snapshot.
pub async fn language_api(
    State(state): State<AppState>,
    Json(req): Json<LanguageRequest>,
) -> Json<Snapshot> {
    match state.dashboard.change_language(req.language).await {
        Ok(snapshot) => Json(snapshot),
        Err(error) => {
            debug!("language refresh failed: {}", error);
            Json(state.dashboard.snapshot().await)
        }
    }
}

/// Parse an optional ISO date field. An empty string counts as absent, the
/// way an unset date picker submits.
fn parse_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ApiError::BadRequest(format!("invalid {}: expected YYYY-MM-DD", field))),
    }
}
