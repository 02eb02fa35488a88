use thiserror::Error;

/// Errors raised while talking to a recipe provider.
///
/// All of these are recoverable: the caller reports them and goes back to
/// collecting input. None of them are retried automatically.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No response arrived within the configured timeout
    #[error("The recipe provider did not respond in time")]
    Timeout,

    /// The provider answered with a non-2xx status
    #[error("The recipe provider returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The response body could not be read as the expected shape
    #[error("The recipe provider returned an unreadable response: {0}")]
    Malformed(String),

    /// No credential was available, so no request was sent
    #[error("No API key is configured for the recipe provider")]
    Unauthenticated,

    /// The request never produced an HTTP response (DNS, refused connection, TLS)
    #[error("Could not reach the recipe provider: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs may carry the key as a query parameter
        let err = err.without_url();
        if err.is_timeout() {
            ProviderError::Timeout
        } else if let Some(status) = err.status() {
            ProviderError::Upstream {
                status: status.as_u16(),
                body: String::new(),
            }
        } else if err.is_decode() {
            ProviderError::Malformed(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

/// Errors that stop the program before any request is made
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Neither the config file nor the environment supplied an API key
    #[error("API key is missing: set `provider.api_key` or the {env_var} environment variable")]
    MissingCredential { env_var: String },

    /// The configured provider kind is not known
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// A configuration value is present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),

    /// Configuration sources could not be read or deserialized
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Invalid user input for a recipe query
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("Maximum preparation time must be between {min} and {max} minutes, got {value}")]
    PrepTimeOutOfRange { value: u32, min: u32, max: u32 },

    #[error("Unknown dietary preference: {0}")]
    UnknownDietaryPreference(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_includes_status_and_body() {
        let err = ProviderError::Upstream {
            status: 503,
            body: "overloaded".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("overloaded"));
    }

    #[test]
    fn test_missing_credential_names_env_var() {
        let err = ConfigurationError::MissingCredential {
            env_var: "GEN_API".to_string(),
        };
        assert!(err.to_string().contains("GEN_API"));
    }
}
