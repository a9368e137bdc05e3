pub mod explanation_popup;
pub mod preparation_service;
pub mod quiz_session;
pub mod result_service;
pub mod selection_service;

pub use explanation_popup::{ExplanationPopup, PopupExpired};
pub use preparation_service::PreparationService;
pub use quiz_session::{Progress, Session, SessionState, TransitionRejected};
pub use result_service::{QuizSummary, ResultService};
pub use selection_service::{QuizSelection, ResolvedSelection, SelectionRejected};
