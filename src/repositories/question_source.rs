use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::RawQuestion, dto::decode_chapter},
};

/// Fetches one chapter's question bank by file name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch(&self, file_name: &str) -> AppResult<Vec<RawQuestion>>;
}

pub struct FileQuestionSource {
    root: PathBuf,
}

impl FileQuestionSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn chapter_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn fetch(&self, file_name: &str) -> AppResult<Vec<RawQuestion>> {
        let path = self.chapter_path(file_name);
        let body = tokio::fs::read(&path).await.map_err(|e| {
            AppError::FetchError(format!("failed to read {}: {}", path.display(), e))
        })?;
        decode_chapter(file_name, &body)
    }
}

pub struct HttpQuestionSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQuestionSource {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn chapter_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.base_url, file_name)
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch(&self, file_name: &str) -> AppResult<Vec<RawQuestion>> {
        let url = self.chapter_url(file_name);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::FetchError(format!(
                "failed to fetch {}: HTTP {}",
                url,
                response.status()
            )));
        }

        let body = response.bytes().await?;
        decode_chapter(file_name, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("chapter-quiz-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
        dir
    }

    #[tokio::test]
    async fn file_source_reads_chapter_from_root() {
        let dir = temp_dir();
        std::fs::write(
            dir.join("15_CMS.json"),
            r#"[{"question_id": 1, "question": "CMS?", "choices": {"1": "Yes", "2": "No"}, "correct_choice": "1", "explanation": "It is."}]"#,
        )
        .expect("fixture should be writable");

        let source = FileQuestionSource::new(&dir);
        let questions = source.fetch("15_CMS.json").await.expect("fetch should work");

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "CMS?");

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn file_source_reports_missing_file() {
        let dir = temp_dir();
        let source = FileQuestionSource::new(&dir);

        let result = source.fetch("missing.json").await;
        assert!(matches!(result, Err(AppError::FetchError(_))));

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn file_source_reports_malformed_json() {
        let dir = temp_dir();
        std::fs::write(dir.join("broken.json"), "[{").expect("fixture should be writable");
        let source = FileQuestionSource::new(&dir);

        let result = source.fetch("broken.json").await;
        assert!(matches!(result, Err(AppError::DecodeError(_))));

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn http_source_joins_base_and_file_name() {
        let source = HttpQuestionSource::new("https://example.com/questions/", Duration::from_secs(1))
            .expect("client should build");
        assert_eq!(
            source.chapter_url("9_UX_UI.json"),
            "https://example.com/questions/9_UX_UI.json"
        );
    }
}
