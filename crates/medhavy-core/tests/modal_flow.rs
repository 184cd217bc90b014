//! End-to-end form flows against the simulated backend, on virtual time.

use std::time::Duration;

use medhavy_core::{
    FieldKind, FormSubmitter, ModalController, ModalKind, ModalState, NewsletterSignup,
    SimulatedSubmitter, SiteError, SiteResult, Submission,
};
use tokio::time::Instant;

/// Backend that always refuses, for exercising the failure path.
struct RejectingSubmitter;

impl FormSubmitter for RejectingSubmitter {
    async fn submit(&self, _submission: &Submission) -> SiteResult<()> {
        Err(SiteError::Submission("service unavailable".to_string()))
    }
}

#[tokio::test(start_paused = true)]
async fn demo_request_scenario() {
    let mut modal = ModalController::new();
    modal.open(ModalKind::Demo);

    let config = modal.config().expect("demo config");
    let fields: Vec<_> = config
        .fields
        .iter()
        .map(|f| (f.label, f.required))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("Full Name", true),
            ("Work Email", true),
            ("Institution", false),
            ("Your Role", false),
            ("What are you hoping to achieve?", false),
        ]
    );
    assert_eq!(config.fields[1].kind, FieldKind::Email);

    modal.set_value("name", "A".to_string());
    modal.set_value("email", "a@b.com".to_string());

    let submission = modal.begin_submit().unwrap();
    assert!(modal.is_submitting(), "submit control must be disabled");

    let submitter = SimulatedSubmitter::default();
    let started = Instant::now();
    let result = submitter.submit(&submission).await;
    let waited = started.elapsed();
    assert!(waited >= Duration::from_millis(1500));
    assert!(waited < Duration::from_millis(1600));

    assert!(modal.finish(submission.ticket, result));
    assert_eq!(modal.state(), &ModalState::Success(ModalKind::Demo));
    assert_eq!(
        modal.config().unwrap().success_message,
        "Thank you! We'll be in touch within 24 hours to schedule your personalized demo."
    );

    modal.close();
    assert!(!modal.is_open());
}

#[tokio::test(start_paused = true)]
async fn closing_mid_flight_drops_the_result() {
    let mut modal = ModalController::new();
    modal.open(ModalKind::Contact);
    modal.set_value("name", "Ada".to_string());
    modal.set_value("email", "ada@example.com".to_string());
    modal.set_value("message", "Hi".to_string());
    let submission = modal.begin_submit().unwrap();

    let submitter = SimulatedSubmitter::default();
    let pending = submitter.submit(&submission);
    modal.close();
    let result = pending.await;

    assert!(!modal.finish(submission.ticket, result));
    assert_eq!(modal.state(), &ModalState::Closed);
}

#[tokio::test(start_paused = true)]
async fn rejected_submission_reopens_the_form() {
    let mut modal = ModalController::new();
    modal.open(ModalKind::LearnMore);
    modal.set_value("name", "Ada".to_string());
    modal.set_value("email", "ada@example.com".to_string());
    let submission = modal.begin_submit().unwrap();

    let result = RejectingSubmitter.submit(&submission).await;
    modal.finish(submission.ticket, result);

    assert!(!modal.is_submitting());
    assert_eq!(
        modal.error_message(),
        Some("Submission failed: service unavailable")
    );
    assert!(modal.begin_submit().is_ok());
}

#[tokio::test(start_paused = true)]
async fn newsletter_signup_flow() {
    let mut signup = NewsletterSignup::new();
    signup.set_email("reader@example.com".to_string());
    let submission = signup.submit().unwrap();
    assert!(signup.is_submitting());

    let submitter = SimulatedSubmitter::new(SimulatedSubmitter::NEWSLETTER_DELAY);
    let started = Instant::now();
    signup.finish(submitter.submit(&submission).await);
    assert!(started.elapsed() >= Duration::from_millis(1000));

    assert!(signup.is_subscribed());
    assert_eq!(NewsletterSignup::CONFIRMATION, "Thanks for subscribing!");
}
