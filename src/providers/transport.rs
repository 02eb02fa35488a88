use std::time::Duration;

use log::{debug, info};
use reqwest::{Client, RequestBuilder};

use crate::error::{ConfigurationError, ProviderError};

/// Timeout applied when the caller does not supply one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the HTTP client shared by every provider
pub fn build_client(timeout: Option<Duration>) -> Result<Client, ConfigurationError> {
    let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("recipe-suggest/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ConfigurationError::HttpClient(e.without_url().to_string()))
}

/// Send a prepared request and return the body of a 2xx response.
///
/// Non-2xx statuses become [`ProviderError::Upstream`] carrying the body the
/// provider sent back; transport failures are mapped through
/// `From<reqwest::Error>`.
pub async fn send(provider: &str, request: RequestBuilder) -> Result<String, ProviderError> {
    info!("Requesting recipe suggestions from {}", provider);

    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        debug!("{} answered {}: {}", provider, status, body);
        return Err(ProviderError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    debug!("{} answered {}: {}", provider, status, body);
    Ok(body)
}
