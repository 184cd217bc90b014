//! The single shared dialog and its submission lifecycle.
//!
//! ```text
//! Closed -> Open(kind) -> Submitting(kind) -> Success(kind) -> Closed
//!                 ^              |
//!                 +-- Failed <---+   (only if the backend rejects)
//! ```
//!
//! `open` from any state replaces whatever was showing. Each submission is
//! tagged with a ticket; completions carrying an old ticket (the user closed
//! or reopened the dialog meanwhile) are dropped.

use crate::error::{SiteError, SiteResult};
use crate::modal::{ModalConfig, ModalKind};
use crate::submit::{FormValues, Submission, SubmissionTicket};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalKind),
    Submitting(ModalKind),
    Success(ModalKind),
    Failed { kind: ModalKind, message: String },
}

impl ModalState {
    pub fn kind(&self) -> Option<ModalKind> {
        match self {
            ModalState::Closed => None,
            ModalState::Open(kind)
            | ModalState::Submitting(kind)
            | ModalState::Success(kind)
            | ModalState::Failed { kind, .. } => Some(*kind),
        }
    }
}

/// State behind the site's one modal dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalController {
    state: ModalState,
    values: FormValues,
    next_ticket: u64,
    in_flight: Option<SubmissionTicket>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn active_kind(&self) -> Option<ModalKind> {
        self.state.kind()
    }

    /// Config of the modal being shown, if any.
    pub fn config(&self) -> Option<&'static ModalConfig> {
        self.active_kind().map(|kind| kind.config())
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    /// The submit button is disabled while this is true.
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, ModalState::Submitting(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self.state, ModalState::Success(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ModalState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Record a field edit. Ignored unless the form is editable.
    pub fn set_value(&mut self, name: &str, value: String) {
        if matches!(self.state, ModalState::Open(_) | ModalState::Failed { .. }) {
            self.values.set(name, value);
        }
    }

    /// Show `kind`, replacing any dialog already on screen.
    pub fn open(&mut self, kind: ModalKind) {
        if let Some(previous) = self.active_kind() {
            tracing::debug!(%previous, %kind, "Replacing open modal");
        }
        tracing::info!(%kind, "Opening modal");
        self.reset();
        self.state = ModalState::Open(kind);
    }

    /// Close from any state, discarding input and any pending submission.
    pub fn close(&mut self) {
        if let Some(kind) = self.active_kind() {
            tracing::info!(%kind, "Closing modal");
        }
        self.reset();
        self.state = ModalState::Closed;
    }

    /// Validate the form and move to `Submitting`.
    pub fn begin_submit(&mut self) -> SiteResult<Submission> {
        let kind = match &self.state {
            ModalState::Open(kind) | ModalState::Failed { kind, .. } => *kind,
            ModalState::Submitting(_) => return Err(SiteError::SubmissionInFlight),
            other => {
                return Err(SiteError::InvalidTransition(format!(
                    "cannot submit from {other:?}"
                )))
            }
        };
        self.values.check_required(kind.config())?;

        self.next_ticket += 1;
        let ticket = SubmissionTicket(self.next_ticket);
        self.in_flight = Some(ticket);
        self.state = ModalState::Submitting(kind);
        tracing::info!(%kind, ticket = ticket.0, "Submitting modal form");

        Ok(Submission {
            ticket,
            kind,
            values: self.values.clone(),
        })
    }

    /// Apply the backend's answer. Returns `false` for a stale ticket.
    pub fn finish(&mut self, ticket: SubmissionTicket, result: SiteResult<()>) -> bool {
        if self.in_flight != Some(ticket) {
            tracing::debug!(ticket = ticket.0, "Ignoring stale submission result");
            return false;
        }
        let ModalState::Submitting(kind) = self.state else {
            return false;
        };
        self.in_flight = None;
        match result {
            Ok(()) => {
                tracing::info!(%kind, "Modal form submitted");
                self.values.clear();
                self.state = ModalState::Success(kind);
            }
            Err(e) => {
                tracing::warn!(%kind, "Modal form submission failed: {}", e);
                self.state = ModalState::Failed {
                    kind,
                    message: e.to_string(),
                };
            }
        }
        true
    }

    fn reset(&mut self) {
        self.values.clear();
        self.in_flight = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_demo() -> ModalController {
        let mut modal = ModalController::new();
        modal.open(ModalKind::Demo);
        modal.set_value("name", "A".to_string());
        modal.set_value("email", "a@b.com".to_string());
        modal
    }

    #[test]
    fn starts_closed() {
        let modal = ModalController::new();
        assert_eq!(modal.state(), &ModalState::Closed);
        assert!(modal.config().is_none());
    }

    #[test]
    fn open_exposes_registered_config() {
        let mut modal = ModalController::new();
        modal.open(ModalKind::ExploreAi);
        assert_eq!(modal.config(), Some(ModalKind::ExploreAi.config()));
    }

    #[test]
    fn last_open_wins() {
        let mut modal = ModalController::new();
        modal.open(ModalKind::Demo);
        modal.set_value("name", "typed".to_string());
        modal.open(ModalKind::Contact);
        assert_eq!(modal.active_kind(), Some(ModalKind::Contact));
        assert_eq!(modal.values().get("name"), None);
    }

    #[test]
    fn submit_requires_required_fields() {
        let mut modal = ModalController::new();
        modal.open(ModalKind::Demo);
        modal.set_value("name", "A".to_string());
        assert!(matches!(
            modal.begin_submit(),
            Err(SiteError::MissingRequiredField(f)) if f == "email"
        ));
        assert_eq!(modal.state(), &ModalState::Open(ModalKind::Demo));
    }

    #[test]
    fn submit_then_finish_reaches_success() {
        let mut modal = filled_demo();
        let submission = modal.begin_submit().unwrap();
        assert!(modal.is_submitting());
        assert_eq!(submission.values.get("email"), Some("a@b.com"));

        assert!(modal.finish(submission.ticket, Ok(())));
        assert!(modal.is_success());
        assert_eq!(
            modal.config().unwrap().success_message,
            "Thank you! We'll be in touch within 24 hours to schedule your personalized demo."
        );
    }

    #[test]
    fn duplicate_submit_is_rejected() {
        let mut modal = filled_demo();
        modal.begin_submit().unwrap();
        assert!(matches!(
            modal.begin_submit(),
            Err(SiteError::SubmissionInFlight)
        ));
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut modal = filled_demo();
        modal.begin_submit().unwrap();
        modal.set_value("name", "B".to_string());
        assert_eq!(modal.values().get("name"), Some("A"));
    }

    #[test]
    fn close_discards_pending_submission() {
        let mut modal = filled_demo();
        let submission = modal.begin_submit().unwrap();
        modal.close();
        assert!(!modal.finish(submission.ticket, Ok(())));
        assert_eq!(modal.state(), &ModalState::Closed);
    }

    #[test]
    fn reopen_ignores_result_of_earlier_submission() {
        let mut modal = filled_demo();
        let first = modal.begin_submit().unwrap();
        modal.open(ModalKind::Demo);
        assert!(!modal.finish(first.ticket, Ok(())));
        assert_eq!(modal.state(), &ModalState::Open(ModalKind::Demo));
    }

    #[test]
    fn failure_keeps_input_and_allows_retry() {
        let mut modal = filled_demo();
        let submission = modal.begin_submit().unwrap();
        modal.finish(
            submission.ticket,
            Err(SiteError::Submission("503".to_string())),
        );
        assert_eq!(modal.error_message(), Some("Submission failed: 503"));
        assert_eq!(modal.values().get("name"), Some("A"));

        let retry = modal.begin_submit().unwrap();
        assert_ne!(retry.ticket, submission.ticket);
    }

    #[test]
    fn cannot_submit_when_closed_or_done() {
        let mut modal = ModalController::new();
        assert!(matches!(
            modal.begin_submit(),
            Err(SiteError::InvalidTransition(_))
        ));

        let mut modal = filled_demo();
        let submission = modal.begin_submit().unwrap();
        modal.finish(submission.ticket, Ok(()));
        assert!(modal.begin_submit().is_err());
    }
}
