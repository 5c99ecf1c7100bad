//! Gemini-backed enrichment for the Pulso feedback dashboard.
//!
//! This crate implements the [`Enricher`] trait against the Gemini
//! `generateContent` REST API.
//!
//! # Features
//!
//! - JSON-mode generation (`responseMimeType: application/json`) with a
//!   balanced-JSON extractor for the stray text models still emit
//! - Strict output contract: a payload missing required fields is an error,
//!   never silently defaulted
//! - Skips the model entirely when the record set has nothing to ask about
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use gemini_enricher::GeminiEnricher;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let enricher = GeminiEnricher::from_env()?;
//!     // Hand it to the dashboard...
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod enricher;
mod json;
mod prompts;

pub use config::{GeminiConfig, GeminiConfigBuilder, DEFAULT_API_URL, DEFAULT_MODEL};
pub use enricher::GeminiEnricher;

// Re-export core types for convenience
pub use feedback_core::{
    async_trait, EnrichError, Enricher, PositiveHighlight, SentimentTally, Suggestion,
};
