//! Shared site context.
//!
//! The root `App` owns the one modal controller and hands out a
//! [`ModalHandle`]. Pages read it once with [`use_modal`] and pass it to
//! each section through a `modal` prop, so every button that opens a
//! dialog shows where that capability came from.

use dioxus::prelude::*;
use medhavy_core::{ModalController, ModalKind, SiteSettings};

/// Copyable handle to the site's modal controller.
#[derive(Clone, Copy, PartialEq)]
pub struct ModalHandle(Signal<ModalController>);

impl ModalHandle {
    pub fn new(controller: Signal<ModalController>) -> Self {
        Self(controller)
    }

    /// Open `kind`, replacing whatever dialog is showing.
    pub fn open(mut self, kind: ModalKind) {
        self.0.write().open(kind);
    }

    pub fn close(mut self) {
        self.0.write().close();
    }

    /// The underlying signal, for the dialog host.
    pub fn controller(&self) -> Signal<ModalController> {
        self.0
    }
}

/// Hook to access the modal handle provided by `App`.
pub fn use_modal() -> ModalHandle {
    use_context::<ModalHandle>()
}

/// Settings resolved at startup.
pub fn settings() -> &'static SiteSettings {
    crate::get_settings()
}
