//! HTTP API for the customer feedback dashboard.
//!
//! Serves the current dashboard snapshot as JSON and exposes the analyze and
//! language-change transitions.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use dashboard::Dashboard;
use gemini_enricher::GeminiEnricher;
use sheet_ingest::SheetClient;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting dashboard API server");

    // Build the collaborators from environment
    let source = SheetClient::from_env()?;
    let enricher = GeminiEnricher::from_env()?;

    // Build application state
    let state = AppState::new(Arc::new(Dashboard::new(source, enricher)));

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "Dashboard API server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
