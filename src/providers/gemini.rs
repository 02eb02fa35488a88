use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::{ApiCredential, ProviderConfig, ResponseShape};
use crate::error::{ConfigurationError, ProviderError};
use crate::providers::{transport, ProviderResponse, RecipeProvider};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GeminiProvider {
    client: Client,
    credential: ApiCredential,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GeminiProvider {
    /// Create a new Google Gemini provider from configuration
    pub fn new(
        config: &ProviderConfig,
        credential: ApiCredential,
        timeout: Option<Duration>,
    ) -> Result<Self, ConfigurationError> {
        if config.shape != ResponseShape::Text {
            warn!("Gemini always answers with prose; ignoring configured response shape");
        }

        Ok(GeminiProvider {
            client: transport::build_client(timeout)?,
            credential,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(response_body: &Value) -> Option<String> {
    let parts = response_body["candidates"][0]["content"]["parts"].as_array()?;
    let text: Vec<&str> = parts.iter().filter_map(|part| part["text"].as_str()).collect();
    if text.is_empty() {
        None
    } else {
        Some(text.concat())
    }
}

#[async_trait]
impl RecipeProvider for GeminiProvider {
    fn provider_name(&self) -> &str {
        "gemini"
    }

    async fn fetch_recipes(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        if self.credential.is_blank() {
            return Err(ProviderError::Unauthenticated);
        }

        let request = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.credential.expose())
            .json(&json!({
                "contents": [{
                    "parts": [{ "text": prompt }]
                }],
                "generationConfig": {
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_tokens
                }
            }));

        let body = transport::send(self.provider_name(), request).await?;
        let response_body: Value =
            serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

        let text = extract_text(&response_body).ok_or_else(|| {
            let reason = response_body["promptFeedback"]["blockReason"]
                .as_str()
                .map(|reason| format!("prompt was blocked: {}", reason))
                .unwrap_or_else(|| "no candidate text in Gemini response".to_string());
            ProviderError::Malformed(reason)
        })?;

        Ok(ProviderResponse::Text(text))
    }
}
