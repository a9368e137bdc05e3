use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A question exactly as it was loaded from a chapter's question bank.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawQuestion {
    pub id: i64,
    pub text: String,
    pub choices: BTreeMap<String, String>, // choice id -> text, keyed so iteration is canonical
    pub correct_choice_id: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Choice {
    pub id: String,
    pub text: String,
}

impl Choice {
    pub fn new(id: &str, text: &str) -> Self {
        Choice {
            id: id.to_string(),
            text: text.to_string(),
        }
    }
}

impl RawQuestion {
    pub fn new(
        id: i64,
        text: &str,
        choices: &[(&str, &str)],
        correct_choice_id: &str,
        explanation: &str,
    ) -> Self {
        RawQuestion {
            id,
            text: text.to_string(),
            choices: choices
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            correct_choice_id: correct_choice_id.to_string(),
            explanation: explanation.to_string(),
        }
    }

    /// Materializes the choices mapping as (id, text) pairs.
    pub fn choice_pairs(&self) -> Vec<Choice> {
        self.choices
            .iter()
            .map(|(id, text)| Choice::new(id, text))
            .collect()
    }

    pub fn correct_choice_text(&self) -> Option<&str> {
        self.choices.get(&self.correct_choice_id).map(String::as_str)
    }
}
