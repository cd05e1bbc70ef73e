//! Gemini generative backend adapter.
//!
//! Implements the `WisdomGenerator` trait against the Gemini
//! `generateContent` endpoint. An adapter constructed without an API key is
//! valid: every call short-circuits to `GenerationError::NotConfigured`
//! without touching the network, and callers serve fallback content.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::config::AiConfig;
use crate::ports::{GenerationError, WisdomGenerator};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini adapter.
pub struct GeminiGenerator {
    api_key: Option<SecretString>,
    model: String,
    temperature: f64,
    max_output_tokens: u32,
    api_base_url: String,
    client: Client,
}

impl GeminiGenerator {
    pub fn new(config: &AiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        let api_key = config
            .gemini_api_key
            .as_ref()
            .filter(|k| !k.is_empty())
            .map(|k| SecretString::new(k.clone()));

        Self {
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            api_base_url: API_BASE_URL.to_string(),
            client,
        }
    }

    /// Point the adapter at a different API host (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base_url, self.model
        )
    }

    /// Pulls the first candidate's text out of a generate response.
    fn extract_text(body: &Value) -> Result<String, GenerationError> {
        body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| GenerationError::InvalidResponse("no candidate text".to_string()))
    }
}

#[async_trait]
impl WisdomGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let Some(api_key) = &self.api_key else {
            return Err(GenerationError::NotConfigured);
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&json!({
                "contents": [{
                    "parts": [{ "text": prompt }],
                }],
                "generationConfig": {
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_output_tokens,
                },
            }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::provider(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::provider(format!(
                "Gemini returned {status}: {body}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        Self::extract_text(&body)
    }
}
