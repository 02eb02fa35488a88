use crate::query::RecipeQuery;

/// Instruction appended to every prompt sent to the provider.
pub const RECIPE_INSTRUCTION: &str =
    "Please provide a quick Indian recipe with step-by-step instructions.";

/// Compose the single prompt string sent to the provider.
///
/// The user's prompt comes first, followed by one line per structured input
/// and the fixed instruction. An empty ingredient list leaves the
/// `Ingredients:` line empty.
pub fn build_prompt(query: &RecipeQuery) -> String {
    format!(
        "{}\n\nIngredients: {}\nDietary Preference: {}\nMaximum Preparation Time: {} minutes\n\n{}",
        query.prompt(),
        query.ingredients().join(", "),
        query.dietary_preference(),
        query.max_prep_minutes(),
        RECIPE_INSTRUCTION
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::DietaryPreference;

    fn query(ingredients: &[&str], preference: DietaryPreference) -> RecipeQuery {
        RecipeQuery::builder()
            .prompt("I want a spicy, quick dinner recipe")
            .ingredients(ingredients.iter().copied())
            .dietary_preference(preference)
            .max_prep_minutes(20)
            .build()
            .unwrap()
    }

    #[test]
    fn test_prompt_layout() {
        let prompt = build_prompt(&query(&["Tomato", "onion"], DietaryPreference::Vegan));
        assert_eq!(
            prompt,
            "I want a spicy, quick dinner recipe\n\n\
             Ingredients: Tomato, onion\n\
             Dietary Preference: Vegan\n\
             Maximum Preparation Time: 20 minutes\n\n\
             Please provide a quick Indian recipe with step-by-step instructions."
        );
    }

    #[test]
    fn test_unset_preference_renders_none() {
        let prompt = build_prompt(&query(&["rice"], DietaryPreference::None));
        assert!(prompt.contains("Dietary Preference: None\n"));
    }

    #[test]
    fn test_empty_ingredients_line() {
        let prompt = build_prompt(&query(&[], DietaryPreference::GlutenFree));
        assert!(prompt.contains("Ingredients: \n"));
        assert!(prompt.contains("Dietary Preference: Gluten-Free"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let q = query(&["paneer", "chickpeas"], DietaryPreference::LowCarb);
        assert_eq!(build_prompt(&q), build_prompt(&q));
        assert!(build_prompt(&q).ends_with(RECIPE_INSTRUCTION));
    }
}
