mod endpoint;
mod factory;
mod gemini;
mod response;
mod transport;

pub use endpoint::EndpointProvider;
pub use factory::ProviderFactory;
pub use gemini::GeminiProvider;
pub use response::{Candidate, ProviderResponse, StructuredRecipe};
pub use transport::DEFAULT_TIMEOUT;

use async_trait::async_trait;

use crate::error::ProviderError;

/// Unified trait for all recipe providers
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "gemini", "endpoint")
    fn provider_name(&self) -> &str;

    /// Send one prompt and return the provider's answer in its raw shape.
    ///
    /// Implementations make exactly one request and never retry.
    async fn fetch_recipes(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;
}
