use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    app_state::AppState,
    models::{
        domain::QuizMode,
        dto::{response::parse_choice_label, ExplanationView, QuestionView, ReviewItem},
    },
    services::{
        ExplanationPopup, PopupExpired, PreparationService, Progress, QuizSelection, QuizSummary,
        ResultService, SelectionRejected, Session, TransitionRejected,
    },
};

/// A message the front-end shows in response to an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Notice {
    #[error("Quiz data could not be loaded; check the question files")]
    Unavailable,

    #[error("Choose a quiz mode first")]
    ModeRequired,

    #[error("Choose a chapter first")]
    ChapterRequired,

    #[error("Unknown chapter: {0}")]
    UnknownChapter(String),

    #[error("No questions found for this mode/chapter")]
    NoData,

    #[error("'{0}' is not one of the choices")]
    InvalidChoice(String),
}

impl From<SelectionRejected> for Notice {
    fn from(rejected: SelectionRejected) -> Self {
        match rejected {
            SelectionRejected::ModeRequired => Notice::ModeRequired,
            SelectionRejected::ChapterRequired => Notice::ChapterRequired,
            SelectionRejected::UnknownChapter(name) => Notice::UnknownChapter(name),
            SelectionRejected::NoData => Notice::NoData,
        }
    }
}

enum Screen {
    Unavailable,
    ModeSelect,
    Quiz { label: String, session: Session },
    Result { label: String, session: Session },
}

/// Everything the front-end needs to draw the current screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Unavailable,
    ModeSelect {
        mode: Option<QuizMode>,
        chapter: Option<String>,
        chapters: Vec<String>,
        can_start: bool,
        random_limit: usize,
    },
    Quiz {
        label: String,
        question: QuestionView,
        progress: Progress,
        explanation: Option<ExplanationView>,
    },
    Result {
        label: String,
        summary: QuizSummary,
        review: Vec<ReviewItem>,
        elapsed_seconds: Option<i64>,
    },
}

/// Owns the active screen and maps each UI action onto a selection or
/// session transition. Invalid transitions are dropped silently.
pub struct QuizController {
    state: AppState,
    selection: QuizSelection,
    screen: Screen,
    popup: Option<ExplanationPopup>,
    popup_events: UnboundedSender<PopupExpired>,
    rng: StdRng,
}

impl QuizController {
    pub fn new(state: AppState, popup_events: UnboundedSender<PopupExpired>) -> Self {
        let rng = match state.config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let screen = if state.is_usable() {
            Screen::ModeSelect
        } else {
            log::error!("No quiz data available; no session can start");
            Screen::Unavailable
        };

        Self {
            state,
            selection: QuizSelection::new(),
            screen,
            popup: None,
            popup_events,
            rng,
        }
    }

    pub fn view(&self) -> ScreenView {
        match &self.screen {
            Screen::Unavailable => ScreenView::Unavailable,
            Screen::ModeSelect => ScreenView::ModeSelect {
                mode: self.selection.mode(),
                chapter: self.selection.chapter().map(str::to_string),
                chapters: self
                    .state
                    .quiz_data
                    .chapter_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                can_start: self.selection.can_start(),
                random_limit: self.state.config.random_limit,
            },
            Screen::Quiz { label, session } => {
                let index = session.current_index().unwrap_or(0);
                let question = &session.questions()[index];
                ScreenView::Quiz {
                    label: label.clone(),
                    question: QuestionView::new(question, index, session.questions().len()),
                    progress: session.progress(),
                    explanation: self.popup.as_ref().map(|p| p.view().clone()),
                }
            }
            Screen::Result { label, session } => ScreenView::Result {
                label: label.clone(),
                summary: ResultService::summarize(session.questions()),
                review: ResultService::review(session.questions()),
                elapsed_seconds: session.elapsed().map(|d| d.num_seconds()),
            },
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::Quiz { session, .. } | Screen::Result { session, .. } => Some(session),
            _ => None,
        }
    }

    pub fn has_popup(&self) -> bool {
        self.popup.is_some()
    }

    pub fn select_mode(&mut self, mode: QuizMode) -> Option<Notice> {
        match self.screen {
            Screen::Unavailable => Some(Notice::Unavailable),
            Screen::ModeSelect => {
                self.selection.select_mode(mode);
                None
            }
            _ => {
                log::debug!("Ignoring mode selection outside the selection screen");
                None
            }
        }
    }

    pub fn select_chapter(&mut self, chapter_name: &str) -> Option<Notice> {
        match self.screen {
            Screen::Unavailable => Some(Notice::Unavailable),
            Screen::ModeSelect => self
                .selection
                .select_chapter(chapter_name, &self.state.quiz_data)
                .err()
                .map(Notice::from),
            _ => {
                log::debug!("Ignoring chapter selection outside the selection screen");
                None
            }
        }
    }

    pub fn start_quiz(&mut self) -> Option<Notice> {
        match self.screen {
            Screen::Unavailable => return Some(Notice::Unavailable),
            Screen::ModeSelect => {}
            _ => {
                log::debug!("Ignoring start while a session exists");
                return None;
            }
        }

        let resolved = match self
            .selection
            .resolve(&self.state.quiz_data, self.state.config.random_limit)
        {
            Ok(resolved) => resolved,
            Err(rejected) => {
                log::warn!("Quiz start rejected: {}", rejected);
                return Some(rejected.into());
            }
        };

        let questions = PreparationService::prepare(&resolved.source, resolved.limit, &mut self.rng);
        let session = match Session::new(questions) {
            Ok(session) => session,
            Err(err) => {
                log::warn!("Quiz start rejected: {}", err);
                return Some(Notice::NoData);
            }
        };

        log::info!(
            "Started session {} ({}, mode {}) with {} questions",
            session.id(),
            resolved.label,
            resolved.mode,
            session.questions().len()
        );
        self.screen = Screen::Quiz {
            label: resolved.label,
            session,
        };
        None
    }

    pub fn select_choice(&mut self, choice_id: &str) {
        let Screen::Quiz { session, .. } = &mut self.screen else {
            log::debug!("Ignoring answer outside an active quiz");
            return;
        };

        match session.answer(choice_id) {
            Ok(next) => {
                *session = next;
                let Some(index) = session.current_index() else {
                    return;
                };
                let view = ExplanationView::new(&session.questions()[index], index);
                // Replacing the popup drops the old one and cancels its timer.
                self.popup = Some(ExplanationPopup::open(
                    view,
                    self.state.config.popup_duration(),
                    self.popup_events.clone(),
                ));
            }
            Err(rejected) => log_rejected("answer", &rejected),
        }
    }

    /// Answers by display label ("A", "b", ...).
    pub fn select_choice_label(&mut self, label: &str) -> Option<Notice> {
        let choice_id = match &self.screen {
            Screen::Quiz { session, .. } => session.current_question().and_then(|question| {
                parse_choice_label(label, question.shuffled_choices.len())
                    .map(|i| question.shuffled_choices[i].id.clone())
            }),
            _ => {
                log::debug!("Ignoring answer outside an active quiz");
                return None;
            }
        };

        match choice_id {
            Some(id) => {
                self.select_choice(&id);
                None
            }
            None => Some(Notice::InvalidChoice(label.trim().to_string())),
        }
    }

    pub fn next_question(&mut self) {
        let Screen::Quiz { label, session } = &mut self.screen else {
            log::debug!("Ignoring advance outside an active quiz");
            return;
        };

        match session.advance() {
            Ok(next) => {
                self.popup = None;
                if next.is_finished() {
                    let summary = ResultService::summarize(next.questions());
                    log::info!(
                        "Finished session {}: {}/{} correct ({})",
                        next.id(),
                        summary.correct,
                        summary.total,
                        summary.percentage_display()
                    );
                    let label = std::mem::take(label);
                    self.screen = Screen::Result {
                        label,
                        session: next,
                    };
                } else {
                    *session = next;
                }
            }
            Err(rejected) => log_rejected("advance", &rejected),
        }
    }

    pub fn dismiss_explanation(&mut self) {
        self.popup = None;
    }

    /// Handles a timer event. Returns true when it closed the current popup.
    pub fn on_popup_expired(&mut self, event: PopupExpired) -> bool {
        match &self.popup {
            Some(popup) if popup.matches(&event) => {
                self.popup = None;
                true
            }
            _ => {
                log::debug!("Ignoring stale popup expiry {}", event.popup_id);
                false
            }
        }
    }

    /// Drops the session and returns to mode selection.
    pub fn restart(&mut self) -> Option<Notice> {
        if let Screen::Unavailable = self.screen {
            return Some(Notice::Unavailable);
        }
        if let Some(session) = self.session() {
            log::info!("Discarding session {}", session.id());
        }

        self.popup = None;
        self.selection = QuizSelection::new();
        self.screen = Screen::ModeSelect;
        None
    }
}

fn log_rejected(action: &str, rejected: &TransitionRejected) {
    log::debug!("Rejected {}: {}", action, rejected);
}
