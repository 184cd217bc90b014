//! Medhavy Site Core Library
//!
//! UI-free building blocks for the Medhavy marketing site.
//!
//! ## Overview
//!
//! Every animated or interactive element on the site is a small state
//! machine that the Dioxus layer drives with timers and browser events:
//!
//! - **Visibility**: one-shot viewport trigger ([`VisibilityTrigger`])
//! - **Typewriters**: cycling words and single-pass reveal ([`CyclingTypewriter`], [`RevealText`])
//! - **Counters**: ease-out count-up for the statistics ([`CountUp`])
//! - **Carousel**: auto-advancing slides with manual override ([`Carousel`])
//! - **Modals**: static form registry plus the shared dialog lifecycle ([`ModalKind`], [`ModalController`])
//! - **Newsletter**: footer signup ([`NewsletterSignup`])
//!
//! None of these own a clock. The caller asks for the next delay, sleeps,
//! and steps the machine, which keeps them deterministic under test.
//!
//! ## Quick Start
//!
//! ```
//! use medhavy_core::{ModalController, ModalKind};
//!
//! let mut modal = ModalController::new();
//! modal.open(ModalKind::Demo);
//! modal.set_value("name", "A".to_string());
//! modal.set_value("email", "a@b.com".to_string());
//!
//! let submission = modal.begin_submit().unwrap();
//! assert!(modal.is_submitting());
//! modal.finish(submission.ticket, Ok(()));
//! assert!(modal.is_success());
//! ```

pub mod carousel;
pub mod chart;
pub mod content;
pub mod counter;
pub mod error;
pub mod icon;
pub mod modal;
pub mod nav;
pub mod newsletter;
pub mod settings;
pub mod submit;
pub mod typewriter;
pub mod visibility;

// Re-exports
pub use carousel::Carousel;
pub use counter::{ease_out_cubic, CountUp};
pub use error::{SiteError, SiteResult};
pub use icon::Icon;
pub use modal::{FieldKind, FormField, ModalConfig, ModalController, ModalKind, ModalState};
pub use newsletter::{NewsletterSignup, NewsletterState};
pub use settings::{SiteSettings, StartPage};
pub use submit::{FormSubmitter, FormValues, SimulatedSubmitter, Submission, SubmissionTicket};
pub use typewriter::{CyclingTypewriter, RevealProgress, RevealText, TypewriterPhase, TypewriterTiming};
pub use visibility::VisibilityTrigger;
