use std::fmt;
use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::ConfigurationError;

/// Top-level configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Provider endpoint and credential settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            timeout: default_timeout(),
        }
    }
}

/// Which provider implementation handles requests
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Google Gemini `generateContent`
    #[default]
    Gemini,
    /// Any JSON endpoint taking `{prompt}` and answering in one of the known shapes
    Endpoint,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Endpoint => "endpoint",
        }
    }
}

/// Structure of a provider response body
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    /// Free prose
    #[default]
    Text,
    /// `[{"output": "..."}]`
    Candidates,
    /// `[{"name": "...", "prep_time": 20, "steps": ["..."]}]`
    Structured,
    /// Decide per response from the body itself
    Auto,
}

/// Where the credential travels on the outbound request
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CredentialPlacement {
    /// `Authorization: Bearer <key>`
    #[default]
    Bearer,
    /// `?<credential_param>=<key>`
    Query,
}

/// Configuration for the recipe provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Provider implementation to use
    #[serde(default)]
    pub kind: ProviderKind,
    /// Model identifier (e.g., "gemini-1.5-flash")
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL for the API endpoint; each kind has its own default
    pub base_url: Option<String>,
    /// Request path appended to the base URL (endpoint kind only)
    pub path: Option<String>,
    /// Expected response shape (endpoint kind only)
    #[serde(default)]
    pub shape: ResponseShape,
    /// API key; when unset the variable named by `api_key_env` is read
    pub api_key: Option<String>,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// How the key is attached to requests (endpoint kind only)
    #[serde(default)]
    pub credential_placement: CredentialPlacement,
    /// Query parameter name used with `credential_placement = "query"`
    #[serde(default = "default_credential_param")]
    pub credential_param: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            model: default_model(),
            base_url: None,
            path: None,
            shape: ResponseShape::default(),
            api_key: None,
            api_key_env: default_api_key_env(),
            credential_placement: CredentialPlacement::default(),
            credential_param: default_credential_param(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl ProviderConfig {
    /// Resolve the API key from the config value or its environment variable.
    ///
    /// A missing or blank key is a configuration error; callers are expected
    /// to stop before issuing any request.
    pub fn credential(&self) -> Result<ApiCredential, ConfigurationError> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
            .map(ApiCredential::new)
            .ok_or_else(|| ConfigurationError::MissingCredential {
                env_var: self.api_key_env.clone(),
            })
    }
}

/// A provider API key.
///
/// The secret is only reachable through [`ApiCredential::expose`]; `Debug`
/// prints a placeholder so the key never ends up in log output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    pub fn new(key: impl Into<String>) -> Self {
        ApiCredential(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiCredential(<redacted>)")
    }
}

// Default value functions
fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEN_API".to_string()
}

fn default_credential_param() -> String {
    "key".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SUGGEST__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SUGGEST__PROVIDER__MODEL
    pub fn load() -> Result<Self, ConfigurationError> {
        load_config(None)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Reject values that would make every request fail
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.timeout == 0 {
            return Err(ConfigurationError::Invalid(
                "timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from an explicit file (required to exist) or the
/// optional `config.toml`, overlaid with `RECIPE_SUGGEST__*` environment variables.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigurationError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("config").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPE_SUGGEST__PROVIDER__API_KEY
        .add_source(
            Environment::with_prefix("RECIPE_SUGGEST")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}
