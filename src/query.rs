use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// Shortest preparation time a query may ask for, in minutes
pub const MIN_PREP_MINUTES: u32 = 5;
/// Longest preparation time a query may ask for, in minutes
pub const MAX_PREP_MINUTES: u32 = 120;

const DEFAULT_PREP_MINUTES: u32 = 15;

/// Dietary restriction the suggested recipe should respect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DietaryPreference {
    #[default]
    None,
    Vegetarian,
    Vegan,
    GlutenFree,
    LowCarb,
}

impl DietaryPreference {
    /// Every preference in the order a form would offer them
    pub const ALL: [DietaryPreference; 5] = [
        DietaryPreference::None,
        DietaryPreference::Vegetarian,
        DietaryPreference::Vegan,
        DietaryPreference::GlutenFree,
        DietaryPreference::LowCarb,
    ];

    /// Human-readable label, also used verbatim in the prompt
    pub fn label(&self) -> &'static str {
        match self {
            DietaryPreference::None => "None",
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::Vegan => "Vegan",
            DietaryPreference::GlutenFree => "Gluten-Free",
            DietaryPreference::LowCarb => "Low-Carb",
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DietaryPreference {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "" | "none" => Ok(DietaryPreference::None),
            "vegetarian" => Ok(DietaryPreference::Vegetarian),
            "vegan" => Ok(DietaryPreference::Vegan),
            "glutenfree" => Ok(DietaryPreference::GlutenFree),
            "lowcarb" => Ok(DietaryPreference::LowCarb),
            _ => Err(QueryError::UnknownDietaryPreference(s.trim().to_string())),
        }
    }
}

/// Split free-text ingredient input on commas, dropping blank entries.
pub fn parse_ingredients(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .map(str::to_string)
        .collect()
}

/// The four user inputs a recipe suggestion is built from.
///
/// A query can only be obtained through [`RecipeQuery::new`] or
/// [`RecipeQueryBuilder::build`], both of which enforce the preparation time
/// range and the ingredient trimming rules, and it cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    prompt: String,
    ingredients: Vec<String>,
    dietary_preference: DietaryPreference,
    max_prep_minutes: u32,
}

impl RecipeQuery {
    pub fn new(
        prompt: impl Into<String>,
        ingredients: Vec<String>,
        dietary_preference: DietaryPreference,
        max_prep_minutes: u32,
    ) -> Result<Self, QueryError> {
        if !(MIN_PREP_MINUTES..=MAX_PREP_MINUTES).contains(&max_prep_minutes) {
            return Err(QueryError::PrepTimeOutOfRange {
                value: max_prep_minutes,
                min: MIN_PREP_MINUTES,
                max: MAX_PREP_MINUTES,
            });
        }

        let ingredients = ingredients
            .into_iter()
            .map(|ingredient| ingredient.trim().to_string())
            .filter(|ingredient| !ingredient.is_empty())
            .collect();

        Ok(RecipeQuery {
            prompt: prompt.into(),
            ingredients,
            dietary_preference,
            max_prep_minutes,
        })
    }

    pub fn builder() -> RecipeQueryBuilder {
        RecipeQueryBuilder::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn dietary_preference(&self) -> DietaryPreference {
        self.dietary_preference
    }

    pub fn max_prep_minutes(&self) -> u32 {
        self.max_prep_minutes
    }
}

/// Builder for collecting query inputs one at a time
#[derive(Debug, Default)]
pub struct RecipeQueryBuilder {
    prompt: String,
    ingredients: Vec<String>,
    dietary_preference: DietaryPreference,
    max_prep_minutes: Option<u32>,
}

impl RecipeQueryBuilder {
    /// Set the free-text request
    ///
    /// # Example
    /// ```
    /// use recipe_suggest::RecipeQuery;
    ///
    /// let builder = RecipeQuery::builder()
    ///     .prompt("I want a spicy, quick dinner recipe");
    /// ```
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the ingredients from comma-separated text, as typed into a form
    ///
    /// # Example
    /// ```
    /// use recipe_suggest::RecipeQuery;
    ///
    /// let query = RecipeQuery::builder()
    ///     .ingredients_text("Tomato, onion, , paneer")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(query.ingredients(), ["Tomato", "onion", "paneer"]);
    /// ```
    pub fn ingredients_text(mut self, text: &str) -> Self {
        self.ingredients = parse_ingredients(text);
        self
    }

    /// Set the ingredients from an already split list
    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn dietary_preference(mut self, preference: DietaryPreference) -> Self {
        self.dietary_preference = preference;
        self
    }

    /// Set the upper bound on preparation time; defaults to 15 minutes
    pub fn max_prep_minutes(mut self, minutes: u32) -> Self {
        self.max_prep_minutes = Some(minutes);
        self
    }

    /// Validate the inputs and produce an immutable query
    ///
    /// # Errors
    /// Returns [`QueryError::PrepTimeOutOfRange`] when the preparation time is
    /// outside 5..=120 minutes.
    pub fn build(self) -> Result<RecipeQuery, QueryError> {
        RecipeQuery::new(
            self.prompt,
            self.ingredients,
            self.dietary_preference,
            self.max_prep_minutes.unwrap_or(DEFAULT_PREP_MINUTES),
        )
    }
}
