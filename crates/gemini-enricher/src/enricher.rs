//! Enricher implementation backed by the Gemini API.

use feedback_core::{
    async_trait, hash_prompt, EnrichError, Enricher, FeedbackRecord, Language, PositiveHighlight,
    SentimentTally, Suggestion, MAX_HIGHLIGHTS, MAX_SUGGESTIONS,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use crate::api_types::{
    ApiError, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::config::GeminiConfig;
use crate::json::extract_json;
use crate::prompts;

/// An [`Enricher`] that calls the Gemini `generateContent` API.
///
/// Every call is stateless: one prompt in, one JSON payload out, parsed
/// against the strict output contract. Prompt templates are fingerprinted
/// once at construction so log lines can correlate output quality with the
/// exact wording in use.
pub struct GeminiEnricher {
    client: Client,
    config: GeminiConfig,
}

impl GeminiEnricher {
    /// Create a new enricher with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, EnrichError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                EnrichError::Configuration(format!("failed to create http client: {}", e))
            })?;

        info!(
            model = %config.model,
            sentiment_prompt = %hash_prompt(prompts::SENTIMENT_TEMPLATE),
            suggestions_prompt = %hash_prompt(prompts::SUGGESTIONS_TEMPLATE),
            highlights_prompt = %hash_prompt(prompts::HIGHLIGHTS_TEMPLATE),
            "gemini enricher initialized"
        );

        Ok(Self { client, config })
    }

    /// Create an enricher from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, EnrichError> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Make a `generateContent` request and return the response text.
    async fn generate(&self, prompt: &str) -> Result<String, EnrichError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, self.config.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content::text(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            }),
        };

        debug!(prompt_hash = %hash_prompt(prompt), "sending generate request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| EnrichError::Network(format!("request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as a structured API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(EnrichError::Generation(format!(
                    "api error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(EnrichError::Generation(format!(
                "api error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| EnrichError::Generation(format!("failed to parse response: {}", e)))?;

        if let Some(ref usage) = completion.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                candidates_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "token usage"
            );
        }

        completion
            .text()
            .ok_or_else(|| EnrichError::Generation("no text in response".to_string()))
    }

    /// Extract and strictly parse the JSON payload from raw model output.
    fn parse_payload<T: DeserializeOwned>(raw: &str) -> Result<T, EnrichError> {
        let json = extract_json(raw);
        serde_json::from_str(json)
            .map_err(|e| EnrichError::Generation(format!("malformed model output: {}", e)))
    }
}

#[async_trait]
impl Enricher for GeminiEnricher {
    async fn sentiment(&self, records: &[FeedbackRecord]) -> Result<SentimentTally, EnrichError> {
        let prompt = prompts::sentiment_prompt(records);
        let raw = self.generate(&prompt).await?;
        let tally: SentimentTally = Self::parse_payload(&raw)?;

        debug!(
            positive = tally.positive,
            neutral = tally.neutral,
            negative = tally.negative,
            "sentiment tally received"
        );

        Ok(tally)
    }

    async fn suggestions(
        &self,
        records: &[FeedbackRecord],
        language: Language,
    ) -> Result<Vec<Suggestion>, EnrichError> {
        let Some(prompt) = prompts::suggestions_prompt(records, language) else {
            debug!("no improvement comments, skipping suggestions call");
            return Ok(Vec::new());
        };

        let raw = self.generate(&prompt).await?;
        let mut suggestions: Vec<Suggestion> = Self::parse_payload(&raw)?;
        suggestions.truncate(MAX_SUGGESTIONS);

        debug!(count = suggestions.len(), "suggestions received");
        Ok(suggestions)
    }

    async fn highlights(
        &self,
        records: &[FeedbackRecord],
        language: Language,
    ) -> Result<Vec<PositiveHighlight>, EnrichError> {
        let Some(prompt) = prompts::highlights_prompt(records, language) else {
            debug!("no highlight candidates, skipping highlights call");
            return Ok(Vec::new());
        };

        let raw = self.generate(&prompt).await?;
        let mut highlights: Vec<PositiveHighlight> = Self::parse_payload(&raw)?;
        highlights.truncate(MAX_HIGHLIGHTS);

        debug!(count = highlights.len(), "highlights received");
        Ok(highlights)
    }

    fn name(&self) -> &str {
        "GeminiEnricher"
    }
}
