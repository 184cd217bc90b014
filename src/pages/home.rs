//! Home page - product pitch from hero to footer.

use dioxus::prelude::*;
use medhavy_core::content::FEATURES;

use crate::app::take_start_route;
use crate::components::{EcosystemSection, FeatureSection, Footer, HeroSection, Navigation, StatsSection};
use crate::context::use_modal;

/// Home page component.
///
/// Redirects once to the configured start page when that is not home.
#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let modal = use_modal();

    use_effect(move || {
        if let Some(route) = take_start_route() {
            tracing::info!("Opening configured start page");
            navigator.replace(route);
        }
    });

    let [conversational, co_instructor, course_creation, unified] = FEATURES;

    rsx! {
        div { class: "page",
            Navigation { modal }

            main { class: "page-main",
                HeroSection { modal }
                FeatureSection { feature: conversational, modal }
                FeatureSection { feature: co_instructor, modal }
                FeatureSection { feature: course_creation, modal }
                StatsSection {}
                FeatureSection { feature: unified, modal }
                EcosystemSection {}
            }

            Footer { modal }
        }
    }
}
