//! Suggest quick recipes from a prompt, an ingredient list, a dietary
//! preference and a time limit by asking a generative-text provider.
//!
//! ```no_run
//! # use recipe_suggest::{AppConfig, ProviderFactory, RecipeQuery, DietaryPreference, suggest_recipes};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let provider = ProviderFactory::from_config(&config)?;
//!
//! let query = RecipeQuery::builder()
//!     .prompt("I want a spicy, quick dinner recipe")
//!     .ingredients_text("Tomato, onion, paneer")
//!     .dietary_preference(DietaryPreference::Vegetarian)
//!     .max_prep_minutes(20)
//!     .build()?;
//!
//! let suggestions = suggest_recipes(provider.as_ref(), &query).await;
//! for recipe in &suggestions.recipes {
//!     println!("{}", recipe.to_text());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod pipeline;
pub mod prompt;
pub mod providers;
pub mod query;

pub use crate::config::{load_config, ApiCredential, AppConfig, ProviderConfig, ResponseShape};
pub use error::{ConfigurationError, ProviderError, QueryError};
pub use model::Recipe;
pub use normalizer::normalize;
pub use pipeline::{suggest_recipes, Suggestions};
pub use prompt::build_prompt;
pub use providers::{ProviderFactory, ProviderResponse, RecipeProvider};
pub use query::{parse_ingredients, DietaryPreference, RecipeQuery, RecipeQueryBuilder};
