use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::RawQuestion;

/// One record of a chapter's question bank, in its on-disk JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct QuestionRecord {
    pub question_id: i64,

    pub question: String,

    #[validate(length(min = 1))]
    pub choices: HashMap<String, String>,

    pub correct_choice: String,

    pub explanation: String,
}

impl TryFrom<QuestionRecord> for RawQuestion {
    type Error = AppError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        record.validate()?;

        if !record.choices.contains_key(&record.correct_choice) {
            return Err(AppError::ValidationError(format!(
                "question {} names correct choice '{}' which is not among its choices",
                record.question_id, record.correct_choice
            )));
        }

        Ok(RawQuestion {
            id: record.question_id,
            text: record.question,
            choices: record.choices.into_iter().collect(),
            correct_choice_id: record.correct_choice,
            explanation: record.explanation,
        })
    }
}

impl From<RawQuestion> for QuestionRecord {
    fn from(question: RawQuestion) -> Self {
        QuestionRecord {
            question_id: question.id,
            question: question.text,
            choices: question.choices.into_iter().collect(),
            correct_choice: question.correct_choice_id,
            explanation: question.explanation,
        }
    }
}

/// Decodes a chapter file body. Records that fail validation are skipped with
/// a warning; a body that is not a JSON array of records is an error.
pub fn decode_chapter(file_name: &str, body: &[u8]) -> AppResult<Vec<RawQuestion>> {
    let records: Vec<QuestionRecord> = serde_json::from_slice(body)?;
    let total = records.len();

    let questions: Vec<RawQuestion> = records
        .into_iter()
        .filter_map(|record| match RawQuestion::try_from(record) {
            Ok(question) => Some(question),
            Err(err) => {
                log::warn!("Skipping malformed record in {}: {}", file_name, err);
                None
            }
        })
        .collect();

    if questions.len() < total {
        log::warn!(
            "Kept {} of {} records from {}",
            questions.len(),
            total,
            file_name
        );
    }

    Ok(questions)
}
