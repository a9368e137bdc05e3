pub mod question_repository;
pub mod question_source;

pub use question_repository::QuestionRepository;
#[cfg(test)]
pub use question_source::MockQuestionSource;
pub use question_source::{FileQuestionSource, HttpQuestionSource, QuestionSource};
