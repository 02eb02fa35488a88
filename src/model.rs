use serde::Serialize;

/// A recipe suggestion, normalized from whichever shape the provider returned.
///
/// Either `steps` or `raw_text` is populated: structured providers fill the
/// steps, prose providers leave them empty and put the whole answer in
/// `raw_text`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Recipe {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_minutes: Option<u32>,
    pub steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

impl Recipe {
    /// Body text of the recipe: numbered steps when present, otherwise the raw text
    pub fn body(&self) -> String {
        if self.steps.is_empty() {
            return self.raw_text.clone().unwrap_or_default();
        }

        let mut body = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect::<Vec<_>>()
            .join("\n");

        if let Some(raw_text) = self.raw_text.as_deref().filter(|t| !t.trim().is_empty()) {
            body.push_str("\n\n");
            body.push_str(raw_text);
        }
        body
    }

    /// Render as a plain-text document: title heading, optional prep time, body.
    ///
    /// This is what gets shown on screen and written by the export option.
    pub fn to_text(&self) -> String {
        let mut output = format!("# {}\n\n", self.name);
        if let Some(minutes) = self.prep_minutes {
            output.push_str(&format!("Preparation time: {} minutes\n\n", minutes));
        }
        output.push_str(&self.body());
        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_with_steps() {
        let recipe = Recipe {
            name: "Dal".to_string(),
            prep_minutes: Some(20),
            steps: vec!["Boil".to_string(), "Simmer".to_string()],
            raw_text: None,
        };
        assert_eq!(
            recipe.to_text(),
            "# Dal\n\nPreparation time: 20 minutes\n\n1. Boil\n2. Simmer\n"
        );
    }

    #[test]
    fn test_to_text_with_raw_text() {
        let recipe = Recipe {
            name: "Generated Recipe".to_string(),
            prep_minutes: None,
            steps: vec![],
            raw_text: Some("Boil rice.".to_string()),
        };
        assert_eq!(recipe.to_text(), "# Generated Recipe\n\nBoil rice.\n");
    }

    #[test]
    fn test_serialization_skips_unset_fields() {
        let recipe = Recipe {
            name: "Dal".to_string(),
            prep_minutes: None,
            steps: vec!["Boil".to_string()],
            raw_text: None,
        };
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["name"], "Dal");
        assert!(json.get("prep_minutes").is_none());
        assert!(json.get("raw_text").is_none());
    }
}
