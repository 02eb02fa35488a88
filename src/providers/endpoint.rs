use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::config::{ApiCredential, CredentialPlacement, ProviderConfig, ResponseShape};
use crate::error::{ConfigurationError, ProviderError};
use crate::providers::{transport, ProviderResponse, RecipeProvider};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_PATH: &str = "/generate";

/// A generic JSON endpoint that takes `{"prompt": ...}` and answers in a
/// configured [`ResponseShape`].
pub struct EndpointProvider {
    client: Client,
    credential: ApiCredential,
    url: String,
    shape: ResponseShape,
    placement: CredentialPlacement,
    credential_param: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl EndpointProvider {
    /// Create a new endpoint provider from configuration
    pub fn new(
        config: &ProviderConfig,
        credential: ApiCredential,
        timeout: Option<Duration>,
    ) -> Result<Self, ConfigurationError> {
        let base_url = config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let path = config.path.as_deref().unwrap_or(DEFAULT_PATH);

        Ok(EndpointProvider {
            client: transport::build_client(timeout)?,
            credential,
            url: join_url(base_url, path),
            shape: config.shape,
            placement: config.credential_placement,
            credential_param: config.credential_param.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    if path.is_empty() {
        return base_url.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[async_trait]
impl RecipeProvider for EndpointProvider {
    fn provider_name(&self) -> &str {
        "endpoint"
    }

    async fn fetch_recipes(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        if self.credential.is_blank() {
            return Err(ProviderError::Unauthenticated);
        }

        let request = self.client.post(&self.url).json(&json!({
            "prompt": prompt,
            "model": self.model,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens
        }));
        let request = match self.placement {
            CredentialPlacement::Bearer => request.bearer_auth(self.credential.expose()),
            CredentialPlacement::Query => {
                request.query(&[(self.credential_param.as_str(), self.credential.expose())])
            }
        };

        let body = transport::send(self.provider_name(), request).await?;
        ProviderResponse::parse(self.shape, &body)
    }
}
