use serde_json::Value;

use crate::model::Recipe;
use crate::providers::{Candidate, ProviderResponse, StructuredRecipe};

pub const GENERATED_RECIPE_NAME: &str = "Generated Recipe";
pub const UNNAMED_RECIPE_NAME: &str = "Unnamed Recipe";
pub const NO_DETAILS: &str = "No details provided.";
pub const NO_RECIPE_FOUND: &str = "No recipe found.";

/// Convert a raw provider answer into recipes.
///
/// Never fails: missing or mistyped fields fall back to defaults, so a
/// successful request always yields something displayable.
pub fn normalize(raw: ProviderResponse) -> Vec<Recipe> {
    match raw {
        ProviderResponse::Text(text) => vec![from_text(text)],
        ProviderResponse::Candidates(candidates) => {
            candidates.into_iter().map(from_candidate).collect()
        }
        ProviderResponse::Structured(entries) => entries.into_iter().map(from_structured).collect(),
    }
}

fn from_text(text: String) -> Recipe {
    let raw_text = if text.trim().is_empty() {
        NO_RECIPE_FOUND.to_string()
    } else {
        text
    };

    Recipe {
        name: GENERATED_RECIPE_NAME.to_string(),
        prep_minutes: None,
        steps: Vec::new(),
        raw_text: Some(raw_text),
    }
}

fn from_candidate(candidate: Candidate) -> Recipe {
    let raw_text = match candidate.output {
        Some(Value::String(output)) => output,
        _ => NO_DETAILS.to_string(),
    };

    Recipe {
        name: GENERATED_RECIPE_NAME.to_string(),
        prep_minutes: None,
        steps: Vec::new(),
        raw_text: Some(raw_text),
    }
}

fn from_structured(entry: StructuredRecipe) -> Recipe {
    let name = match entry.name {
        Some(Value::String(name)) if !name.trim().is_empty() => name,
        _ => UNNAMED_RECIPE_NAME.to_string(),
    };
    let steps = entry.steps.map(parse_steps).unwrap_or_default();
    let raw_text = match entry.output {
        Some(Value::String(output)) if !output.trim().is_empty() => Some(output),
        _ => steps.is_empty().then(|| NO_DETAILS.to_string()),
    };

    Recipe {
        name,
        prep_minutes: entry.prep_time.as_ref().and_then(parse_minutes),
        steps,
        raw_text,
    }
}

/// Read a preparation time from a number or a string such as "20" or "20 minutes"
fn parse_minutes(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => {
            if let Some(minutes) = number.as_u64() {
                u32::try_from(minutes).ok()
            } else {
                number
                    .as_f64()
                    .filter(|m| m.is_finite() && m.fract() == 0.0)
                    .filter(|m| (0.0..=u32::MAX as f64).contains(m))
                    .map(|m| m as u32)
            }
        }
        Value::String(text) => text.split_whitespace().next()?.parse().ok(),
        _ => None,
    }
}

fn parse_steps(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(step) => Some(step),
                Value::Number(number) => Some(number.to_string()),
                _ => None,
            })
            .map(|step| step.trim().to_string())
            .filter(|step| !step.is_empty())
            .collect(),
        Value::String(step) if !step.trim().is_empty() => vec![step.trim().to_string()],
        _ => Vec::new(),
    }
}
