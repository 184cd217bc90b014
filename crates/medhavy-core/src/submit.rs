//! Form values and the submission backend seam.
//!
//! The site has no backend yet; [`SimulatedSubmitter`] waits for a fixed
//! delay and reports success. A real endpoint plugs in by implementing
//! [`FormSubmitter`].

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use crate::error::{SiteError, SiteResult};
use crate::modal::{ModalConfig, ModalKind};

/// Field name -> entered value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Every required field of `config` must hold a non-blank value.
    pub fn check_required(&self, config: &ModalConfig) -> SiteResult<()> {
        for field in config.required_fields() {
            let filled = self.get(field.name).is_some_and(|v| !v.trim().is_empty());
            if !filled {
                return Err(SiteError::MissingRequiredField(field.name.to_string()));
            }
        }
        Ok(())
    }
}

/// Identifies one submission attempt so late completions can be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionTicket(pub u64);

/// A form ready to hand to a [`FormSubmitter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: SubmissionTicket,
    pub kind: ModalKind,
    pub values: FormValues,
}

/// Delivers a submission to whatever stands behind the forms.
pub trait FormSubmitter {
    fn submit(&self, submission: &Submission) -> impl Future<Output = SiteResult<()>> + Send;
}

/// Stand-in backend: waits, then accepts everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    /// Delay used by the modal forms.
    pub const MODAL_DELAY: Duration = Duration::from_millis(1500);
    /// Delay used by the footer newsletter form.
    pub const NEWSLETTER_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Self::MODAL_DELAY)
    }
}

impl FormSubmitter for SimulatedSubmitter {
    async fn submit(&self, submission: &Submission) -> SiteResult<()> {
        tracing::debug!(
            kind = %submission.kind,
            ticket = submission.ticket.0,
            fields = submission.values.iter().count(),
            "Simulating form submission"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_must_be_present() {
        let config = ModalKind::Contact.config();
        let values = FormValues::new()
            .with("name", "Ada")
            .with("email", "ada@example.com");
        assert!(matches!(
            values.check_required(config),
            Err(SiteError::MissingRequiredField(name)) if name == "message"
        ));

        let values = values.with("message", "Hello");
        assert!(values.check_required(config).is_ok());
    }

    #[test]
    fn blank_values_count_as_missing() {
        let config = ModalKind::Newsletter.config();
        let values = FormValues::new().with("email", "   ");
        assert!(values.check_required(config).is_err());
    }

    #[test]
    fn optional_fields_may_be_left_out() {
        let config = ModalKind::Demo.config();
        let values = FormValues::new().with("name", "A").with("email", "a@b.com");
        assert!(values.check_required(config).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_submitter_waits_then_succeeds() {
        let submitter = SimulatedSubmitter::default();
        let submission = Submission {
            ticket: SubmissionTicket(1),
            kind: ModalKind::Demo,
            values: FormValues::new(),
        };
        let started = tokio::time::Instant::now();
        submitter.submit(&submission).await.unwrap();
        assert!(started.elapsed() >= SimulatedSubmitter::MODAL_DELAY);
    }
}
