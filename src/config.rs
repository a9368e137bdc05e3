use std::env;
use std::path::PathBuf;
use std::time::Duration;

use validator::Validate;

use crate::constants::defaults::{
    DEFAULT_FETCH_TIMEOUT_SECONDS, DEFAULT_POPUP_SECONDS, DEFAULT_QUESTIONS_SOURCE,
    DEFAULT_RANDOM_LIMIT,
};
use crate::constants::default_chapters;
use crate::errors::{AppError, AppResult};
use crate::models::domain::ChapterInfo;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceLocation {
    Directory(PathBuf),
    Http(String),
}

#[derive(Clone, Debug, Validate)]
pub struct Config {
    #[validate(length(min = 1))]
    pub questions_source: String,
    #[validate(length(min = 1))]
    pub chapters: Vec<ChapterInfo>,
    #[validate(range(min = 1))]
    pub random_limit: usize,
    pub popup_seconds: u64,
    #[validate(range(min = 1))]
    pub fetch_timeout_seconds: u64,
    pub shuffle_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        let chapters = match env::var("QUIZ_CHAPTERS_FILE") {
            Ok(path) => Self::load_chapters_file(&path)?,
            Err(_) => default_chapters(),
        };

        let config = Self {
            questions_source: env::var("QUIZ_QUESTIONS_SOURCE")
                .unwrap_or_else(|_| DEFAULT_QUESTIONS_SOURCE.to_string()),
            chapters,
            random_limit: env::var("QUIZ_RANDOM_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RANDOM_LIMIT),
            popup_seconds: env::var("QUIZ_POPUP_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_POPUP_SECONDS),
            fetch_timeout_seconds: env::var("QUIZ_FETCH_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECONDS),
            shuffle_seed: env::var("QUIZ_SHUFFLE_SEED")
                .ok()
                .and_then(|v| v.parse().ok()),
        };

        config.check()?;
        Ok(config)
    }

    fn load_chapters_file(path: &str) -> AppResult<Vec<ChapterInfo>> {
        let body = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!("cannot read chapters file '{}': {}", path, e))
        })?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::ConfigError(format!("invalid chapters file '{}': {}", path, e))
        })
    }

    /// Validates the configuration and rejects duplicate chapter names.
    pub fn check(&self) -> AppResult<()> {
        self.validate()?;
        for chapter in &self.chapters {
            chapter.validate()?;
        }

        let mut names: Vec<&str> = self
            .chapters
            .iter()
            .map(|c| c.chapter_name.as_str())
            .collect();
        names.sort_unstable();
        if let Some(pair) = names.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(AppError::ConfigError(format!(
                "chapter '{}' is configured more than once",
                pair[0]
            )));
        }

        Ok(())
    }

    pub fn source_location(&self) -> SourceLocation {
        let source = self.questions_source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            SourceLocation::Http(source.trim_end_matches('/').to_string())
        } else {
            SourceLocation::Directory(PathBuf::from(source))
        }
    }

    /// `None` disables auto-dismissal of the explanation popup.
    pub fn popup_duration(&self) -> Option<Duration> {
        (self.popup_seconds > 0).then(|| Duration::from_secs(self.popup_seconds))
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            questions_source: "questions".to_string(),
            chapters: crate::test_utils::fixtures::test_chapters(8),
            random_limit: 80,
            popup_seconds: 0,
            fetch_timeout_seconds: 1,
            shuffle_seed: Some(42),
        }
    }
}
