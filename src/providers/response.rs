use serde::Deserialize;
use serde_json::Value;

use crate::config::ResponseShape;
use crate::error::ProviderError;

/// One alternative output in a candidate-list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub output: Option<Value>,
}

/// One entry of a structured-list response.
///
/// Fields are kept as raw JSON so that type mismatches degrade during
/// normalization instead of failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StructuredRecipe {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub prep_time: Option<Value>,
    #[serde(default)]
    pub steps: Option<Value>,
    /// Prose answer carried by an entry that has no steps of its own
    #[serde(default)]
    pub output: Option<Value>,
}

/// Raw provider answer in one of the known shapes
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResponse {
    /// Unstructured prose
    Text(String),
    /// `[{"output": ...}]`
    Candidates(Vec<Candidate>),
    /// `[{"name": ..., "prep_time": ..., "steps": [...]}]`
    Structured(Vec<StructuredRecipe>),
}

impl ProviderResponse {
    /// Parse a response body according to the configured shape
    ///
    /// # Errors
    /// Returns [`ProviderError::Malformed`] when a list shape is expected but the
    /// body is not JSON, is JSON of the wrong top-level type, or is a bare object
    /// without any of the shape's fields (an error payload, typically).
    pub fn parse(shape: ResponseShape, body: &str) -> Result<Self, ProviderError> {
        match shape {
            ResponseShape::Text => Ok(ProviderResponse::Text(parse_text(body))),
            ResponseShape::Candidates => {
                let entries = parse_entries(body, CANDIDATE_FIELDS)?;
                Ok(ProviderResponse::Candidates(
                    entries.into_iter().map(candidate_from_value).collect(),
                ))
            }
            ResponseShape::Structured => {
                let entries = parse_entries(body, STRUCTURED_FIELDS)?;
                Ok(ProviderResponse::Structured(
                    entries.into_iter().map(structured_from_value).collect(),
                ))
            }
            ResponseShape::Auto => detect(body),
        }
    }
}

fn parse_text(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => text,
        _ => body.to_string(),
    }
}

const CANDIDATE_FIELDS: &[&str] = &["output"];
const STRUCTURED_FIELDS: &[&str] = &["name", "prep_time", "steps"];
const ANY_RECIPE_FIELDS: &[&str] = &["output", "name", "prep_time", "steps"];

fn parse_entries(body: &str, fields: &[&str]) -> Result<Vec<Value>, ProviderError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ProviderError::Malformed(e.to_string()))?;
    into_entries(value, fields)
}

/// A list is taken as is; a bare object only counts as a single entry when it
/// carries at least one of `fields`.
fn into_entries(value: Value, fields: &[&str]) -> Result<Vec<Value>, ProviderError> {
    match value {
        Value::Array(entries) => Ok(entries),
        Value::Object(ref object) => {
            if fields.iter().any(|field| object.contains_key(*field)) {
                Ok(vec![value])
            } else {
                Err(ProviderError::Malformed(format!(
                    "expected a recipe object with one of {:?}, got {}",
                    fields, value
                )))
            }
        }
        other => Err(ProviderError::Malformed(format!(
            "expected a list of recipes, got {}",
            json_type_name(&other)
        ))),
    }
}

fn candidate_from_value(value: Value) -> Candidate {
    serde_json::from_value(value).unwrap_or_default()
}

fn structured_from_value(value: Value) -> StructuredRecipe {
    serde_json::from_value(value).unwrap_or_default()
}

/// Pick a shape by looking at the body itself
fn detect(body: &str) -> Result<ProviderResponse, ProviderError> {
    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(_) => return Ok(ProviderResponse::Text(body.to_string())),
    };

    match value {
        Value::String(text) => Ok(ProviderResponse::Text(text)),
        Value::Array(_) | Value::Object(_) => {
            let entries = into_entries(value, ANY_RECIPE_FIELDS)?;
            let is_candidate_list = !entries.is_empty()
                && entries
                    .iter()
                    .all(|entry| entry.get("output").is_some() && entry.get("steps").is_none());

            if is_candidate_list {
                Ok(ProviderResponse::Candidates(
                    entries.into_iter().map(candidate_from_value).collect(),
                ))
            } else {
                Ok(ProviderResponse::Structured(
                    entries.into_iter().map(structured_from_value).collect(),
                ))
            }
        }
        other => Err(ProviderError::Malformed(format!(
            "cannot interpret a JSON {} as recipes",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
