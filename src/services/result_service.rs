use serde::Serialize;

use crate::models::{domain::SessionQuestion, dto::ReviewItem};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuizSummary {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub percentage: f64,
}

impl QuizSummary {
    pub fn percentage_display(&self) -> String {
        format!("{:.2}%", self.percentage)
    }
}

pub struct ResultService;

impl ResultService {
    /// Counts correct answers; an empty list scores 0%.
    pub fn summarize(questions: &[SessionQuestion]) -> QuizSummary {
        let total = questions.len();
        let correct = questions
            .iter()
            .filter(|q| q.is_correct() == Some(true))
            .count();
        let percentage = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64 * 100.0
        };

        QuizSummary {
            total,
            correct,
            incorrect: total - correct,
            percentage,
        }
    }

    pub fn review(questions: &[SessionQuestion]) -> Vec<ReviewItem> {
        questions
            .iter()
            .enumerate()
            .map(|(i, q)| ReviewItem::new(q, i))
            .collect()
    }
}
