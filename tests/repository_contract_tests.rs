use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::sync::{Barrier, RwLock};

use chapter_quiz::{
    errors::{AppError, AppResult},
    models::domain::{ChapterInfo, RawQuestion},
    repositories::{FileQuestionSource, QuestionRepository, QuestionSource},
};

struct InMemoryQuestionSource {
    banks: Arc<RwLock<HashMap<String, Vec<RawQuestion>>>>,
    barrier: Option<Arc<Barrier>>,
}

impl InMemoryQuestionSource {
    fn new() -> Self {
        Self {
            banks: Arc::new(RwLock::new(HashMap::new())),
            barrier: None,
        }
    }

    /// Every fetch waits until `parties` fetches are in flight at once.
    fn with_barrier(mut self, parties: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    async fn put(&self, file_name: &str, questions: Vec<RawQuestion>) {
        self.banks
            .write()
            .await
            .insert(file_name.to_string(), questions);
    }
}

#[async_trait]
impl QuestionSource for InMemoryQuestionSource {
    async fn fetch(&self, file_name: &str) -> AppResult<Vec<RawQuestion>> {
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        let banks = self.banks.read().await;
        banks
            .get(file_name)
            .cloned()
            .ok_or_else(|| AppError::FetchError(format!("Failed to fetch {}", file_name)))
    }
}

fn make_question(id: i64) -> RawQuestion {
    RawQuestion::new(
        id,
        &format!("Question {}", id),
        &[("1", "First"), ("2", "Second"), ("3", "Third"), ("4", "Fourth")],
        "3",
        "Third is right.",
    )
}

fn make_chapters(count: usize) -> Vec<ChapterInfo> {
    (1..=count)
        .map(|n| ChapterInfo::new(&format!("{}_chapter.json", n), &format!("{}. Chapter", n)))
        .collect()
}

#[tokio::test]
async fn two_failed_chapters_out_of_eight_resolve_to_empty_lists() {
    let chapters = make_chapters(8);
    let source = InMemoryQuestionSource::new();
    for (n, chapter) in chapters.iter().enumerate() {
        if n == 2 || n == 5 {
            continue;
        }
        let questions = (0..15).map(|i| make_question((n * 15 + i) as i64)).collect();
        source.put(&chapter.file_name, questions).await;
    }

    let repository = QuestionRepository::new(Arc::new(source), chapters.clone());
    let data = repository.load_all().await;

    assert_eq!(data.chapter_count(), 8);
    for (n, chapter) in chapters.iter().enumerate() {
        assert!(data.contains(&chapter.chapter_name));
        let expected = if n == 2 || n == 5 { 0 } else { 15 };
        assert_eq!(data.get(&chapter.chapter_name).len(), expected);
    }
    assert_eq!(data.total_questions(), 90);
    assert!(!data.has_no_questions());
}

#[tokio::test]
async fn chapter_fetches_run_concurrently() {
    let chapters = make_chapters(8);
    let source = InMemoryQuestionSource::new().with_barrier(chapters.len());
    for (n, chapter) in chapters.iter().enumerate().skip(1) {
        source.put(&chapter.file_name, vec![make_question(n as i64)]).await;
    }

    let repository = QuestionRepository::new(Arc::new(source), chapters);

    // Sequential fetching would never get every fetch past the barrier.
    let data = tokio::time::timeout(Duration::from_secs(5), repository.load_all())
        .await
        .expect("all chapter fetches should be in flight together");

    assert_eq!(data.chapter_count(), 8);
    assert!(data.get("1. Chapter").is_empty());
    assert_eq!(data.total_questions(), 7);
}

#[tokio::test]
async fn nothing_available_is_a_loadable_state() {
    let repository = QuestionRepository::new(Arc::new(InMemoryQuestionSource::new()), make_chapters(3));
    let data = repository.load_all().await;

    assert_eq!(data.chapter_count(), 3);
    assert!(data.has_no_questions());
}

#[tokio::test]
async fn file_source_contract_with_mixed_directory() {
    let dir = std::env::temp_dir().join(format!("chapter-quiz-contract-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");

    std::fs::write(
        dir.join("1_chapter.json"),
        r#"[
            {"question_id": 1, "question": "Which test level checks a single unit?", "choices": {"1": "Unit", "2": "System"}, "correct_choice": "1", "explanation": "Unit tests isolate one unit."},
            {"question_id": 2, "question": "Who performs acceptance testing?", "choices": {"1": "Developers", "2": "Customers"}, "correct_choice": "2", "explanation": "Customers accept the system."}
        ]"#,
    )
    .expect("fixture should be writable");
    std::fs::write(dir.join("2_chapter.json"), "not json").expect("fixture should be writable");

    let repository = QuestionRepository::new(Arc::new(FileQuestionSource::new(&dir)), make_chapters(3));
    let data = repository.load_all().await;

    assert_eq!(data.get("1. Chapter").len(), 2);
    assert!(data.get("2. Chapter").is_empty());
    assert!(data.get("3. Chapter").is_empty());
    assert_eq!(data.get("1. Chapter")[1].correct_choice_text(), Some("Customers"));

    std::fs::remove_dir_all(dir).ok();
}
