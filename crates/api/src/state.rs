//! Application state shared across handlers.

use std::sync::Arc;

use dashboard::Dashboard;
use gemini_enricher::GeminiEnricher;
use sheet_ingest::SheetClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The dashboard state machine behind every route.
    pub dashboard: Arc<Dashboard<SheetClient, GeminiEnricher>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(dashboard: Arc<Dashboard<SheetClient, GeminiEnricher>>) -> Self {
        Self { dashboard }
    }
}
