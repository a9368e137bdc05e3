use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::models::dto::ExplanationView;

/// Sent when a popup's auto-dismiss delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupExpired {
    pub popup_id: Uuid,
    pub question_index: usize,
}

/// The explanation shown after answering. Owns its auto-dismiss timer;
/// dropping the popup aborts the timer.
pub struct ExplanationPopup {
    id: Uuid,
    view: ExplanationView,
    timer: Option<JoinHandle<()>>,
}

impl ExplanationPopup {
    /// Must be called from within a tokio runtime when `auto_dismiss` is set.
    pub fn open(
        view: ExplanationView,
        auto_dismiss: Option<Duration>,
        events: UnboundedSender<PopupExpired>,
    ) -> Self {
        let id = Uuid::new_v4();
        let event = PopupExpired {
            popup_id: id,
            question_index: view.question_index,
        };

        let timer = auto_dismiss.map(|delay| {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                log::debug!("Explanation popup {} expired", event.popup_id);
                // The receiver is gone once the front-end has shut down.
                let _ = events.send(event);
            })
        });

        Self { id, view, timer }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn view(&self) -> &ExplanationView {
        &self.view
    }

    /// Whether this popup is the one `event` was raised for.
    pub fn matches(&self, event: &PopupExpired) -> bool {
        self.id == event.popup_id
    }

    pub fn has_timer(&self) -> bool {
        self.timer.as_ref().map(|t| !t.is_finished()).unwrap_or(false)
    }
}

impl Drop for ExplanationPopup {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            if !timer.is_finished() {
                log::debug!("Cancelling timer of explanation popup {}", self.id);
            }
            timer.abort();
        }
    }
}
