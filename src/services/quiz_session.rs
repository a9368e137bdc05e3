use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::SessionQuestion,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active { index: usize },
    Finished,
}

/// Why a transition was refused. The session value is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionRejected {
    #[error("session is already finished")]
    Finished,

    #[error("current question is already answered")]
    AlreadyAnswered,

    #[error("current question has not been answered")]
    NotAnswered,

    #[error("choice '{0}' is not offered by the current question")]
    UnknownChoice(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
    pub percent: f64,
}

/// One run through a prepared question list. Transitions never mutate in
/// place; each accepted transition returns the next session value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: Uuid,
    questions: Vec<SessionQuestion>,
    state: SessionState,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(questions: Vec<SessionQuestion>) -> AppResult<Self> {
        if questions.is_empty() {
            return Err(AppError::EmptySession);
        }

        Ok(Session {
            id: Uuid::new_v4(),
            questions,
            state: SessionState::Active { index: 0 },
            started_at: Utc::now(),
            finished_at: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn questions(&self) -> &[SessionQuestion] {
        &self.questions
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::Active { index } => Some(index),
            SessionState::Finished => None,
        }
    }

    pub fn current_question(&self) -> Option<&SessionQuestion> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index()
            .map(|i| i + 1 == self.questions.len())
            .unwrap_or(false)
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Time from start to finish, once finished.
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|end| end - self.started_at)
    }

    pub fn progress(&self) -> Progress {
        let total = self.questions.len();
        let position = self.current_index().map(|i| i + 1).unwrap_or(total);
        Progress {
            position,
            total,
            percent: position as f64 / total as f64 * 100.0,
        }
    }

    pub fn answer(&self, choice_id: &str) -> Result<Session, TransitionRejected> {
        let index = self.current_index().ok_or(TransitionRejected::Finished)?;
        let current = &self.questions[index];

        if !current.offers_choice(choice_id) {
            return Err(TransitionRejected::UnknownChoice(choice_id.to_string()));
        }
        let answered = current
            .with_answer(choice_id)
            .ok_or(TransitionRejected::AlreadyAnswered)?;

        let mut next = self.clone();
        next.questions[index] = answered;
        Ok(next)
    }

    pub fn advance(&self) -> Result<Session, TransitionRejected> {
        let index = self.current_index().ok_or(TransitionRejected::Finished)?;
        if !self.questions[index].is_answered() {
            return Err(TransitionRejected::NotAnswered);
        }

        let mut next = self.clone();
        if index + 1 < self.questions.len() {
            next.state = SessionState::Active { index: index + 1 };
        } else {
            next.state = SessionState::Finished;
            next.finished_at = Some(Utc::now());
        }
        Ok(next)
    }
}
