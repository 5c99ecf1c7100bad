//! Route handlers for the dashboard API.

pub mod analysis;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Dashboard endpoints
        .route("/api/dashboard", get(analysis::snapshot_api))
        .route("/api/analyze", post(analysis::analyze_api))
        .route("/api/language", post(analysis::language_api))
}
