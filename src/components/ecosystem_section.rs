use dioxus::prelude::*;
use medhavy_core::content::{
    ECOSYSTEM_HEADING, ECOSYSTEM_HEADING_CHAR_DELAY, ECOSYSTEM_HEADING_DELAY, PARTNERS,
};
use medhavy_core::visibility::DEFAULT_THRESHOLD;
use medhavy_ui::{use_delayed_flag, use_visibility, Glyph, TypewriterText};

/// Students, instructors, administrators. The heading types itself out
/// shortly after the section appears.
#[component]
pub fn EcosystemSection() -> Element {
    let reveal = use_visibility(DEFAULT_THRESHOLD);
    let show_heading = use_delayed_flag(reveal.visible, ECOSYSTEM_HEADING_DELAY);
    let char_delay = ECOSYSTEM_HEADING_CHAR_DELAY.as_millis() as u64;

    rsx! {
        section { id: "ecosystem", class: "ecosystem-section",
            div { id: "{reveal.id}", class: "container {reveal.class()}",
                div { class: "section-heading",
                    div { class: "pill", "Ecosystem" }
                    h2 {
                        if show_heading() {
                            TypewriterText { text: ECOSYSTEM_HEADING.to_string(), speed_ms: char_delay }
                        } else {
                            // Holds the line height until typing starts
                            span { class: "invisible", "{ECOSYSTEM_HEADING}" }
                        }
                    }
                    p { class: "lead", "Building Better Education Through Collaboration" }
                    p { "Medhavy connects three essential partners" }
                }

                div { class: "partner-grid",
                    for (index, partner) in PARTNERS.iter().enumerate() {
                        div {
                            key: "{partner.title}",
                            class: "partner-card",
                            style: "transition-delay: {(index + 1) * 150}ms",
                            div { class: "partner-media",
                                Glyph { icon: partner.icon, class: "media-icon" }
                                span { "Image" }
                                div { class: "media-shade" }
                            }
                            h3 {
                                Glyph { icon: partner.icon, class: "text-primary" }
                                "{partner.title}"
                            }
                            p { "{partner.description}" }
                        }
                    }
                }
            }
        }
    }
}
