use serde::Serialize;

use crate::models::domain::SessionQuestion;

const CHOICE_LABELS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Display label for the choice at `index` in shuffled order.
pub fn choice_label(index: usize) -> char {
    CHOICE_LABELS
        .get(index)
        .map(|b| *b as char)
        .unwrap_or('?')
}

/// Parses a typed label ("b", "B") back into a position among `choice_count` choices.
pub fn parse_choice_label(input: &str, choice_count: usize) -> Option<usize> {
    let mut chars = input.trim().chars();
    let label = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }

    CHOICE_LABELS
        .iter()
        .take(choice_count)
        .position(|b| *b as char == label)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceStatus {
    Selectable,
    Correct,
    WrongSelection,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    pub label: char,
    pub id: String,
    pub text: String,
    pub status: ChoiceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub choices: Vec<ChoiceView>,
    pub answered: bool,
    pub is_last: bool,
}

impl QuestionView {
    pub fn new(question: &SessionQuestion, index: usize, total: usize) -> Self {
        let selected = question.selected_choice_id();
        let correct = question.question.correct_choice_id.as_str();

        let choices = question
            .shuffled_choices
            .iter()
            .enumerate()
            .map(|(i, choice)| {
                let status = match selected {
                    None => ChoiceStatus::Selectable,
                    Some(_) if choice.id == correct => ChoiceStatus::Correct,
                    Some(picked) if picked == choice.id => ChoiceStatus::WrongSelection,
                    Some(_) => ChoiceStatus::Inactive,
                };
                ChoiceView {
                    label: choice_label(i),
                    id: choice.id.clone(),
                    text: choice.text.clone(),
                    status,
                }
            })
            .collect();

        QuestionView {
            number: index + 1,
            total,
            text: question.question.text.clone(),
            choices,
            answered: selected.is_some(),
            is_last: index + 1 == total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplanationView {
    pub question_index: usize,
    pub was_correct: bool,
    pub correct_text: String,
    pub explanation: String,
}

impl ExplanationView {
    pub fn new(question: &SessionQuestion, question_index: usize) -> Self {
        ExplanationView {
            question_index,
            was_correct: question.is_correct().unwrap_or(false),
            correct_text: question
                .question
                .correct_choice_text()
                .unwrap_or("(answer not found)")
                .to_string(),
            explanation: question.question.explanation.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewItem {
    pub number: usize,
    pub question: String,
    pub selected_text: Option<String>,
    pub correct_text: Option<String>,
    pub is_correct: bool,
}

impl ReviewItem {
    pub fn new(question: &SessionQuestion, index: usize) -> Self {
        ReviewItem {
            number: index + 1,
            question: question.question.text.clone(),
            selected_text: question.selected_choice_text().map(str::to_string),
            correct_text: question.question.correct_choice_text().map(str::to_string),
            is_correct: question.is_correct().unwrap_or(false),
        }
    }
}
