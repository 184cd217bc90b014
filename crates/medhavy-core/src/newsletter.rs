//! Footer newsletter signup.
//!
//! One email field, one shot per mount: after a successful subscribe the
//! form stays in `Subscribed` until the footer is remounted.

use crate::error::{SiteError, SiteResult};
use crate::modal::ModalKind;
use crate::submit::{FormValues, Submission, SubmissionTicket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewsletterState {
    #[default]
    Idle,
    Submitting,
    Subscribed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterSignup {
    email: String,
    state: NewsletterState,
    attempts: u64,
}

impl NewsletterSignup {
    pub const CONFIRMATION: &'static str = "Thanks for subscribing!";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NewsletterState {
        self.state
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitting(&self) -> bool {
        self.state == NewsletterState::Submitting
    }

    pub fn is_subscribed(&self) -> bool {
        self.state == NewsletterState::Subscribed
    }

    pub fn set_email(&mut self, email: String) {
        if self.state == NewsletterState::Idle {
            self.email = email;
        }
    }

    /// Validate the email and move to `Submitting`.
    pub fn submit(&mut self) -> SiteResult<Submission> {
        match self.state {
            NewsletterState::Submitting => return Err(SiteError::SubmissionInFlight),
            NewsletterState::Subscribed => {
                return Err(SiteError::InvalidTransition(
                    "already subscribed".to_string(),
                ))
            }
            NewsletterState::Idle => {}
        }
        if self.email.trim().is_empty() {
            return Err(SiteError::MissingRequiredField("email".to_string()));
        }

        self.attempts += 1;
        self.state = NewsletterState::Submitting;
        tracing::info!("Submitting newsletter signup");
        Ok(Submission {
            ticket: SubmissionTicket(self.attempts),
            kind: ModalKind::Newsletter,
            values: FormValues::new().with("email", self.email.trim()),
        })
    }

    pub fn finish(&mut self, result: SiteResult<()>) {
        if self.state != NewsletterState::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                tracing::info!("Newsletter signup confirmed");
                self.email.clear();
                self.state = NewsletterState::Subscribed;
            }
            Err(e) => {
                tracing::warn!("Newsletter signup failed: {}", e);
                self.state = NewsletterState::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_email_is_rejected() {
        let mut signup = NewsletterSignup::new();
        signup.set_email("  ".to_string());
        assert!(matches!(
            signup.submit(),
            Err(SiteError::MissingRequiredField(_))
        ));
        assert_eq!(signup.state(), NewsletterState::Idle);
    }

    #[test]
    fn subscribe_is_one_shot() {
        let mut signup = NewsletterSignup::new();
        signup.set_email("reader@example.com".to_string());
        let submission = signup.submit().unwrap();
        assert_eq!(submission.values.get("email"), Some("reader@example.com"));
        assert!(matches!(signup.submit(), Err(SiteError::SubmissionInFlight)));

        signup.finish(Ok(()));
        assert!(signup.is_subscribed());
        assert_eq!(signup.email(), "");

        signup.set_email("again@example.com".to_string());
        assert_eq!(signup.email(), "");
        assert!(signup.submit().is_err());
    }

    #[test]
    fn failure_returns_to_idle_with_email_kept() {
        let mut signup = NewsletterSignup::new();
        signup.set_email("reader@example.com".to_string());
        signup.submit().unwrap();
        signup.finish(Err(SiteError::Submission("offline".to_string())));
        assert_eq!(signup.state(), NewsletterState::Idle);
        assert_eq!(signup.email(), "reader@example.com");
    }
}
