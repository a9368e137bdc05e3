use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    SingleChapter, // questions from one chosen chapter
    RandomN,       // a bounded random draw across all chapters
}

impl std::fmt::Display for QuizMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizMode::SingleChapter => write!(f, "single_chapter"),
            QuizMode::RandomN => write!(f, "random_n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_mode_serializes_as_snake_case() {
        let json = serde_json::to_string(&QuizMode::SingleChapter).expect("mode should serialize");
        assert_eq!(json, "\"single_chapter\"");

        let parsed: QuizMode = serde_json::from_str("\"random_n\"").expect("mode should deserialize");
        assert_eq!(parsed, QuizMode::RandomN);
    }

    #[test]
    fn quiz_mode_rejects_unknown_variant() {
        assert!(serde_json::from_str::<QuizMode>("\"random_80\"").is_err());
    }
}
