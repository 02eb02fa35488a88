use std::time::Duration;

use crate::config::{ApiCredential, AppConfig, ProviderConfig, ProviderKind};
use crate::error::ConfigurationError;
use crate::providers::{EndpointProvider, GeminiProvider, RecipeProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        config: &ProviderConfig,
        credential: ApiCredential,
        timeout: Option<Duration>,
    ) -> Result<Box<dyn RecipeProvider>, ConfigurationError> {
        match config.kind {
            ProviderKind::Gemini => {
                Ok(Box::new(GeminiProvider::new(config, credential, timeout)?))
            }
            ProviderKind::Endpoint => {
                Ok(Box::new(EndpointProvider::new(config, credential, timeout)?))
            }
        }
    }

    /// Resolve the credential and build the configured provider.
    ///
    /// A missing credential fails here, before any request can be attempted.
    pub fn from_config(config: &AppConfig) -> Result<Box<dyn RecipeProvider>, ConfigurationError> {
        let credential = config.provider.credential()?;
        Self::create(&config.provider, credential, Some(config.timeout()))
    }

    /// Look up a provider kind by name
    pub fn kind_from_name(name: &str) -> Result<ProviderKind, ConfigurationError> {
        Self::available_providers()
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ConfigurationError::UnknownProvider(name.to_string()))
    }

    /// List all available provider kinds
    pub fn available_providers() -> Vec<ProviderKind> {
        vec![ProviderKind::Gemini, ProviderKind::Endpoint]
    }
}
