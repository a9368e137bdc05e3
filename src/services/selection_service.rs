use thiserror::Error;

use crate::models::domain::{QuizData, QuizMode, RawQuestion};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionRejected {
    #[error("Choose a quiz mode first")]
    ModeRequired,

    #[error("Choose a chapter first")]
    ChapterRequired,

    #[error("Unknown chapter: {0}")]
    UnknownChapter(String),

    #[error("No questions found for this mode/chapter")]
    NoData,
}

/// The source list and limit a selection hands to preparation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSelection {
    pub mode: QuizMode,
    pub label: String,
    pub source: Vec<RawQuestion>,
    pub limit: Option<usize>,
}

/// Mode and chapter picked on the selection screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSelection {
    mode: Option<QuizMode>,
    chapter: Option<String>,
}

impl QuizSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Option<QuizMode> {
        self.mode
    }

    pub fn chapter(&self) -> Option<&str> {
        self.chapter.as_deref()
    }

    /// Switching mode always clears the chosen chapter.
    pub fn select_mode(&mut self, mode: QuizMode) {
        self.mode = Some(mode);
        self.chapter = None;
    }

    pub fn select_chapter(
        &mut self,
        chapter_name: &str,
        data: &QuizData,
    ) -> Result<(), SelectionRejected> {
        if self.mode != Some(QuizMode::SingleChapter) {
            return Err(SelectionRejected::ModeRequired);
        }
        if !data.contains(chapter_name) {
            return Err(SelectionRejected::UnknownChapter(chapter_name.to_string()));
        }

        self.chapter = Some(chapter_name.to_string());
        Ok(())
    }

    /// Whether the start action is enabled.
    pub fn can_start(&self) -> bool {
        match self.mode {
            None => false,
            Some(QuizMode::SingleChapter) => self.chapter.is_some(),
            Some(QuizMode::RandomN) => true,
        }
    }

    pub fn resolve(
        &self,
        data: &QuizData,
        random_limit: usize,
    ) -> Result<ResolvedSelection, SelectionRejected> {
        let resolved = match self.mode {
            None => return Err(SelectionRejected::ModeRequired),
            Some(QuizMode::SingleChapter) => {
                let chapter = self
                    .chapter
                    .as_deref()
                    .ok_or(SelectionRejected::ChapterRequired)?;
                ResolvedSelection {
                    mode: QuizMode::SingleChapter,
                    label: chapter.to_string(),
                    source: data.get(chapter).to_vec(),
                    limit: None,
                }
            }
            Some(QuizMode::RandomN) => ResolvedSelection {
                mode: QuizMode::RandomN,
                label: random_label(random_limit),
                source: data.all_questions(),
                limit: Some(random_limit),
            },
        };

        if resolved.source.is_empty() {
            return Err(SelectionRejected::NoData);
        }
        Ok(resolved)
    }
}

pub fn random_label(random_limit: usize) -> String {
    format!("Random {} questions from all chapters", random_limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{numbered_questions, test_quiz_data};

    #[test]
    fn nothing_selected_cannot_start() {
        let selection = QuizSelection::new();
        assert!(!selection.can_start());
        assert_eq!(
            selection.resolve(&test_quiz_data(2, 3), 80),
            Err(SelectionRejected::ModeRequired)
        );
    }

    #[test]
    fn single_chapter_requires_a_chapter() {
        let mut selection = QuizSelection::new();
        selection.select_mode(QuizMode::SingleChapter);

        assert!(!selection.can_start());
        assert_eq!(
            selection.resolve(&test_quiz_data(2, 3), 80),
            Err(SelectionRejected::ChapterRequired)
        );
    }

    #[test]
    fn single_chapter_uses_that_chapter_only() {
        let data = test_quiz_data(3, 4);
        let mut selection = QuizSelection::new();
        selection.select_mode(QuizMode::SingleChapter);
        selection
            .select_chapter("Chapter 2", &data)
            .expect("chapter exists");

        let resolved = selection.resolve(&data, 80).expect("selection should resolve");
        assert!(selection.can_start());
        assert_eq!(resolved.label, "Chapter 2");
        assert_eq!(resolved.limit, None);
        assert_eq!(resolved.source, data.get("Chapter 2").to_vec());
    }

    #[test]
    fn empty_chapter_is_rejected_with_no_data() {
        let mut data = test_quiz_data(2, 3);
        data.insert("Chapter 2", vec![]);
        let mut selection = QuizSelection::new();
        selection.select_mode(QuizMode::SingleChapter);
        selection.select_chapter("Chapter 2", &data).expect("chapter exists");

        assert_eq!(selection.resolve(&data, 80), Err(SelectionRejected::NoData));
    }

    #[test]
    fn unknown_chapter_is_rejected() {
        let data = test_quiz_data(2, 3);
        let mut selection = QuizSelection::new();
        selection.select_mode(QuizMode::SingleChapter);

        assert_eq!(
            selection.select_chapter("Chapter 9", &data),
            Err(SelectionRejected::UnknownChapter("Chapter 9".to_string()))
        );
        assert_eq!(selection.chapter(), None);
    }

    #[test]
    fn chapter_needs_single_chapter_mode() {
        let data = test_quiz_data(2, 3);
        let mut selection = QuizSelection::new();
        selection.select_mode(QuizMode::RandomN);

        assert_eq!(
            selection.select_chapter("Chapter 1", &data),
            Err(SelectionRejected::ModeRequired)
        );
    }

    #[test]
    fn switching_mode_clears_chapter() {
        let data = test_quiz_data(2, 3);
        let mut selection = QuizSelection::new();
        selection.select_mode(QuizMode::SingleChapter);
        selection.select_chapter("Chapter 1", &data).expect("chapter exists");

        selection.select_mode(QuizMode::RandomN);
        selection.select_mode(QuizMode::SingleChapter);
        assert_eq!(selection.chapter(), None);
        assert!(!selection.can_start());
    }

    #[test]
    fn random_mode_pools_every_chapter_with_configured_limit() {
        let mut data = test_quiz_data(3, 5);
        data.insert("Extra", numbered_questions(500, 2));
        let mut selection = QuizSelection::new();
        selection.select_mode(QuizMode::RandomN);

        let resolved = selection.resolve(&data, 12).expect("selection should resolve");
        assert_eq!(resolved.source.len(), 17);
        assert_eq!(resolved.limit, Some(12));
        assert_eq!(resolved.label, "Random 12 questions from all chapters");
    }

    #[test]
    fn random_mode_over_empty_data_is_rejected() {
        let mut data = test_quiz_data(0, 0);
        data.insert("Chapter 1", vec![]);
        let mut selection = QuizSelection::new();
        selection.select_mode(QuizMode::RandomN);

        assert_eq!(selection.resolve(&data, 80), Err(SelectionRejected::NoData));
    }
}
