use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::domain::{RawQuestion, SessionQuestion};

pub struct PreparationService;

impl PreparationService {
    /// Shuffles the questions, keeps at most `limit` of them (all when `None`)
    /// and shuffles each kept question's choices. The input is left untouched
    /// and every returned question starts unanswered.
    pub fn prepare<R: Rng + ?Sized>(
        questions: &[RawQuestion],
        limit: Option<usize>,
        rng: &mut R,
    ) -> Vec<SessionQuestion> {
        let limit = limit.unwrap_or(questions.len()).min(questions.len());

        let mut order: Vec<&RawQuestion> = questions.iter().collect();
        order.shuffle(rng);
        order.truncate(limit);

        order
            .into_iter()
            .map(|question| {
                let mut choices = question.choice_pairs();
                choices.shuffle(rng);
                SessionQuestion::new(question.clone(), choices)
            })
            .collect()
    }
}
