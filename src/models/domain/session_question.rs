use serde::{Deserialize, Serialize};

use crate::models::domain::question::{Choice, RawQuestion};

/// A question prepared for one session: choices are shuffled once and the
/// answer fields start empty. The answer is write-once.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionQuestion {
    pub question: RawQuestion,
    pub shuffled_choices: Vec<Choice>,
    selected_choice_id: Option<String>,
    is_correct: Option<bool>,
}

impl SessionQuestion {
    pub fn new(question: RawQuestion, shuffled_choices: Vec<Choice>) -> Self {
        SessionQuestion {
            question,
            shuffled_choices,
            selected_choice_id: None,
            is_correct: None,
        }
    }

    pub fn selected_choice_id(&self) -> Option<&str> {
        self.selected_choice_id.as_deref()
    }

    pub fn is_correct(&self) -> Option<bool> {
        self.is_correct
    }

    pub fn is_answered(&self) -> bool {
        self.selected_choice_id.is_some()
    }

    pub fn offers_choice(&self, choice_id: &str) -> bool {
        self.shuffled_choices.iter().any(|c| c.id == choice_id)
    }

    /// Returns a copy with the answer locked in, or `None` when this question
    /// already holds an answer.
    pub fn with_answer(&self, choice_id: &str) -> Option<Self> {
        if self.is_answered() {
            return None;
        }

        Some(SessionQuestion {
            question: self.question.clone(),
            shuffled_choices: self.shuffled_choices.clone(),
            selected_choice_id: Some(choice_id.to_string()),
            is_correct: Some(choice_id == self.question.correct_choice_id),
        })
    }

    /// Text of the choice the user picked, if answered.
    pub fn selected_choice_text(&self) -> Option<&str> {
        let selected = self.selected_choice_id.as_deref()?;
        self.shuffled_choices
            .iter()
            .find(|c| c.id == selected)
            .map(|c| c.text.as_str())
    }
}
