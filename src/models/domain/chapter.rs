use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::question::RawQuestion;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct ChapterInfo {
    #[validate(length(min = 1))]
    pub file_name: String,
    #[validate(length(min = 1))]
    pub chapter_name: String,
}

impl ChapterInfo {
    pub fn new(file_name: &str, chapter_name: &str) -> Self {
        ChapterInfo {
            file_name: file_name.to_string(),
            chapter_name: chapter_name.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
struct ChapterQuestions {
    chapter_name: String,
    questions: Vec<RawQuestion>,
}

/// Every loaded chapter's questions, in configured chapter order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QuizData {
    chapters: Vec<ChapterQuestions>,
}

impl QuizData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a chapter's questions, replacing an earlier entry with the same name.
    pub fn insert(&mut self, chapter_name: &str, questions: Vec<RawQuestion>) {
        match self
            .chapters
            .iter_mut()
            .find(|c| c.chapter_name == chapter_name)
        {
            Some(existing) => existing.questions = questions,
            None => self.chapters.push(ChapterQuestions {
                chapter_name: chapter_name.to_string(),
                questions,
            }),
        }
    }

    /// A missing chapter reads as an empty list.
    pub fn get(&self, chapter_name: &str) -> &[RawQuestion] {
        self.chapters
            .iter()
            .find(|c| c.chapter_name == chapter_name)
            .map(|c| c.questions.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, chapter_name: &str) -> bool {
        self.chapters.iter().any(|c| c.chapter_name == chapter_name)
    }

    pub fn chapter_names(&self) -> Vec<&str> {
        self.chapters.iter().map(|c| c.chapter_name.as_str()).collect()
    }

    /// All chapters' questions concatenated.
    pub fn all_questions(&self) -> Vec<RawQuestion> {
        self.chapters
            .iter()
            .flat_map(|c| c.questions.iter().cloned())
            .collect()
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn total_questions(&self) -> usize {
        self.chapters.iter().map(|c| c.questions.len()).sum()
    }

    /// True when no chapter holds a single question.
    pub fn has_no_questions(&self) -> bool {
        self.total_questions() == 0
    }
}
