use log::{error, info};

use crate::error::ProviderError;
use crate::model::Recipe;
use crate::normalizer::normalize;
use crate::prompt::build_prompt;
use crate::providers::RecipeProvider;
use crate::query::RecipeQuery;

/// Outcome of one suggestion request.
///
/// On failure `recipes` is empty and `error` says why; nothing from a failed
/// request is kept.
#[derive(Debug, Default)]
pub struct Suggestions {
    pub recipes: Vec<Recipe>,
    pub error: Option<ProviderError>,
}

impl Suggestions {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    fn failed(error: ProviderError) -> Self {
        Suggestions {
            recipes: Vec::new(),
            error: Some(error),
        }
    }
}

/// Run one query end to end: build the prompt, call the provider once,
/// normalize the answer.
pub async fn suggest_recipes(provider: &dyn RecipeProvider, query: &RecipeQuery) -> Suggestions {
    let prompt = build_prompt(query);

    match provider.fetch_recipes(&prompt).await {
        Ok(raw) => {
            let recipes = normalize(raw);
            info!(
                "{} returned {} recipe(s)",
                provider.provider_name(),
                recipes.len()
            );
            Suggestions {
                recipes,
                error: None,
            }
        }
        Err(e) => {
            error!(
                "Recipe request to {} failed: {}",
                provider.provider_name(),
                e
            );
            Suggestions::failed(e)
        }
    }
}
