//! Alternating text and media feature block.

use dioxus::prelude::*;
use medhavy_core::content::{Feature, ImagePosition};
use medhavy_core::visibility::DEFAULT_THRESHOLD;
use medhavy_ui::{use_visibility, Button, ButtonVariant, Glyph};

use crate::context::ModalHandle;

/// One alternating text/media feature block that slides in when scrolled to.
#[component]
pub fn FeatureSection(feature: Feature, modal: ModalHandle) -> Element {
    let reveal = use_visibility(DEFAULT_THRESHOLD);

    let side = match feature.image {
        ImagePosition::Left => "media-left",
        ImagePosition::Right => "media-right",
    };
    let kind = feature.modal;

    rsx! {
        section { id: feature.anchor, class: "feature-section",
            div { id: "{reveal.id}", class: "container feature-grid {side} {reveal.class()}",
                div { class: "feature-media",
                    div { class: "grid-texture light" }
                    div { class: "media-placeholder",
                        Glyph { icon: feature.icon, class: "media-icon" }
                        span { "Media Content" }
                    }
                    div { class: "media-shade" }
                }

                div { class: "feature-copy",
                    if let Some(eyebrow) = feature.eyebrow {
                        div { class: "eyebrow",
                            div { class: "eyebrow-rule" }
                            p { "{eyebrow}" }
                        }
                    }
                    h2 { "{feature.title}" }
                    p { class: "lead", "{feature.description}" }
                    div {
                        Button {
                            variant: ButtonVariant::Outline,
                            arrow: true,
                            onclick: move |_| modal.open(kind),
                            "{feature.cta}"
                        }
                    }
                }
            }
        }
    }
}
