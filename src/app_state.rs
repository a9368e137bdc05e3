use std::sync::Arc;

use crate::{
    config::{Config, SourceLocation},
    errors::AppResult,
    models::domain::QuizData,
    repositories::{FileQuestionSource, HttpQuestionSource, QuestionRepository, QuestionSource},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_data: Arc<QuizData>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let source: Arc<dyn QuestionSource> = match config.source_location() {
            SourceLocation::Directory(root) => {
                log::info!("Reading question banks from {}", root.display());
                Arc::new(FileQuestionSource::new(root))
            }
            SourceLocation::Http(base_url) => {
                log::info!("Fetching question banks from {}", base_url);
                Arc::new(HttpQuestionSource::new(&base_url, config.fetch_timeout())?)
            }
        };

        let repository = QuestionRepository::new(source, config.chapters.clone());
        let quiz_data = repository.load_all().await;

        Ok(Self::from_parts(config, quiz_data))
    }

    pub fn from_parts(config: Config, quiz_data: QuizData) -> Self {
        Self {
            quiz_data: Arc::new(quiz_data),
            config: Arc::new(config),
        }
    }

    /// False when every chapter failed to load or is empty.
    pub fn is_usable(&self) -> bool {
        !self.quiz_data.has_no_questions()
    }
}
