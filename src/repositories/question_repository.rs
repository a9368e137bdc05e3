use std::sync::Arc;

use futures::future::join_all;

use crate::{
    models::domain::{ChapterInfo, QuizData},
    repositories::QuestionSource,
};

pub struct QuestionRepository {
    source: Arc<dyn QuestionSource>,
    chapters: Vec<ChapterInfo>,
}

impl QuestionRepository {
    pub fn new(source: Arc<dyn QuestionSource>, chapters: Vec<ChapterInfo>) -> Self {
        Self { source, chapters }
    }

    /// Fetches every configured chapter concurrently. A chapter that fails to
    /// load is recorded with an empty list; this never fails as a whole.
    pub async fn load_all(&self) -> QuizData {
        let fetches = self.chapters.iter().map(|chapter| {
            let source = Arc::clone(&self.source);
            async move {
                let result = source.fetch(&chapter.file_name).await;
                (chapter, result)
            }
        });

        let mut data = QuizData::new();
        for (chapter, result) in join_all(fetches).await {
            match result {
                Ok(questions) => {
                    log::info!(
                        "Loaded {} questions for {} from {}",
                        questions.len(),
                        chapter.chapter_name,
                        chapter.file_name
                    );
                    data.insert(&chapter.chapter_name, questions);
                }
                Err(err) => {
                    log::error!(
                        "Error loading quiz data for {}: {}",
                        chapter.chapter_name,
                        err
                    );
                    data.insert(&chapter.chapter_name, Vec::new());
                }
            }
        }

        log::info!(
            "Loaded {} questions across {} chapters",
            data.total_questions(),
            data.chapter_count()
        );
        data
    }
}
