#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{ChapterInfo, QuizData, RawQuestion, SessionQuestion};

    /// Creates a four-choice question whose correct choice is `correct`.
    pub fn raw_question(id: i64, correct: &str) -> RawQuestion {
        let texts: Vec<String> = (1..=4)
            .map(|k| format!("Choice {} of question {}", k, id))
            .collect();
        RawQuestion::new(
            id,
            &format!("Question {}", id),
            &[
                ("1", texts[0].as_str()),
                ("2", texts[1].as_str()),
                ("3", texts[2].as_str()),
                ("4", texts[3].as_str()),
            ],
            correct,
            &format!("Explanation for question {}", id),
        )
    }

    /// Creates `count` questions with consecutive ids starting at `first_id`.
    pub fn numbered_questions(first_id: i64, count: usize) -> Vec<RawQuestion> {
        (0..count as i64)
            .map(|offset| {
                let id = first_id + offset;
                raw_question(id, &((id % 4) + 1).to_string())
            })
            .collect()
    }

    /// A session-ready question with choices in mapping order.
    pub fn session_question(id: i64, correct: &str) -> SessionQuestion {
        let question = raw_question(id, correct);
        let choices = question.choice_pairs();
        SessionQuestion::new(question, choices)
    }

    /// Creates `count` chapter entries named "Chapter N".
    pub fn test_chapters(count: usize) -> Vec<ChapterInfo> {
        (1..=count)
            .map(|n| ChapterInfo::new(&format!("chapter_{}.json", n), &format!("Chapter {}", n)))
            .collect()
    }

    /// Quiz data with `chapters` chapters of `per_chapter` questions each, ids unique.
    pub fn test_quiz_data(chapters: usize, per_chapter: usize) -> QuizData {
        let mut data = QuizData::new();
        for (n, chapter) in test_chapters(chapters).iter().enumerate() {
            let first_id = (n * per_chapter) as i64 + 1;
            data.insert(&chapter.chapter_name, numbered_questions(first_id, per_chapter));
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_raw_question() {
        let question = raw_question(3, "2");
        assert_eq!(question.choices.len(), 4);
        assert_eq!(question.correct_choice_text(), Some("Choice 2 of question 3"));
    }

    #[test]
    fn test_fixtures_numbered_questions() {
        let questions = numbered_questions(5, 3);
        let ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![5, 6, 7]);
    }

    #[test]
    fn test_fixtures_test_quiz_data() {
        let data = test_quiz_data(8, 15);
        assert_eq!(data.chapter_count(), 8);
        assert_eq!(data.total_questions(), 120);
        assert_eq!(data.get("Chapter 8")[14].id, 120);
    }
}
