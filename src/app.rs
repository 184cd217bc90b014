use std::sync::atomic::{AtomicBool, Ordering};

use dioxus::prelude::*;
use medhavy_core::{ModalController, StartPage};

use crate::components::ModalHost;
use crate::context::{settings, ModalHandle};
use crate::pages::{About, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Product landing page
/// - `/about` - Mission, leadership and values
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
}

/// Root application component.
///
/// Provides global styles, the modal handle, and routing.
#[component]
pub fn App() -> Element {
    let controller = use_signal(ModalController::new);
    let modal = use_context_provider(|| ModalHandle::new(controller));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        ModalHost { modal }
    }
}

static START_ROUTE_TAKEN: AtomicBool = AtomicBool::new(false);

/// The configured start page, handed out once per process.
///
/// `None` when the start page is home or it was already applied.
pub fn take_start_route() -> Option<Route> {
    if START_ROUTE_TAKEN.swap(true, Ordering::Relaxed) {
        return None;
    }
    match settings().start_page {
        StartPage::Home => None,
        StartPage::About => Some(Route::About {}),
    }
}
