//! About page - etymology, mission, leadership, values, learning science.

use dioxus::prelude::*;
use medhavy_core::content::{
    ABOUT_HEADING, ABOUT_HEADING_CHAR_DELAY, CORE_VALUES, DONUT_SEGMENTS, LEADERS,
    LEARNING_PRINCIPLES,
};
use medhavy_core::visibility::DEFAULT_THRESHOLD;
use medhavy_core::{Icon, ModalKind};
use medhavy_ui::{use_visibility, Button, ButtonSize, ButtonVariant, Glyph, TypewriterText};

use crate::components::{DonutChart, Footer, Navigation};
use crate::context::use_modal;

/// Share of the hero that must show before it fades in.
const HERO_THRESHOLD: f64 = 0.1;
/// The heading starts typing once half of it is on screen.
const HEADING_THRESHOLD: f64 = 0.5;

#[component]
pub fn About() -> Element {
    let modal = use_modal();
    let hero = use_visibility(HERO_THRESHOLD);
    let mission = use_visibility(DEFAULT_THRESHOLD);
    let team = use_visibility(DEFAULT_THRESHOLD);
    let values = use_visibility(DEFAULT_THRESHOLD);
    let science = use_visibility(DEFAULT_THRESHOLD);

    rsx! {
        div { class: "page about-page",
            Navigation { modal }

            section { class: "etymology-hero",
                div { class: "hero-glow hero-glow-right" }
                div { class: "hero-glow hero-glow-left" }
                div { id: "{hero.id}", class: "container etymology {hero.class()}",
                    p { class: "sanskrit", "\u{92E}\u{947}\u{927}\u{93E}\u{935}\u{940}" }
                    h1 { class: "serif-italic",
                        TypewriterHeading {}
                    }
                    p { class: "tagline serif-italic",
                        "\u{201C}Medhavy transforms how knowledge is shared, making elite education "
                        "accessible to every corner of the globe.\u{201D}"
                    }
                    p { class: "sub-tag",
                        "A Global Education Initiative led by "
                        span { class: "text-primary strong", "Professor Sridhar Srinivas" }
                    }
                }
            }

            section { class: "about-section",
                div { id: "{mission.id}", class: "container mission-grid {mission.class()}",
                    div { class: "mission-copy slide-from-left",
                        p { class: "kicker", "Our Mission" }
                        h2 { class: "serif", "Bridging the Gap" }
                        p { class: "lead",
                            "Medhavy transforms static textbooks into living, AI-powered courses inside "
                            "Learning Management Systems like Canvas. We bridge the gap between traditional "
                            "educational content and personalized learning by combining automation with "
                            "instructor control."
                        }
                        p { class: "lead",
                            "Led by "
                            span { class: "strong", "Professor Sridhar Srinivas" }
                            " and supported by the fellows at "
                            span { class: "text-primary strong", "Humanitarians AI" }
                            ", we believe AI serves education's highest purpose when it democratizes learning."
                        }
                        div { class: "callout",
                            div { class: "callout-icon",
                                Glyph { icon: Icon::User }
                            }
                            p { "Built by educators, for educators." }
                        }
                    }
                    div { class: "mission-chart slide-from-right",
                        div { class: "card",
                            DonutChart { segments: DONUT_SEGMENTS.to_vec(), visible: mission.visible }
                        }
                    }
                }
            }

            section { class: "about-section tinted",
                div { id: "{team.id}", class: "container {team.class()}",
                    div { class: "section-heading",
                        p { class: "lead",
                            "AI is only as good as the humans who guide it. Meet the educators and "
                            "technologists behind Medhavy."
                        }
                    }
                    div { class: "leader-grid",
                        for (index, leader) in LEADERS.iter().enumerate() {
                            div {
                                key: "{leader.name}",
                                class: if leader.highlighted { "leader-card highlighted" } else { "leader-card" },
                                style: "transition-delay: {(index + 1) * 200}ms",
                                div { class: "leader-avatar",
                                    Glyph { icon: leader.icon }
                                }
                                div {
                                    h3 { class: "serif", "{leader.name}" }
                                    p { class: "leader-role", "{leader.role}" }
                                    p { class: "leader-bio", "{leader.bio}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "about-section",
                div { id: "{values.id}", class: "container values-grid {values.class()}",
                    for (index, value) in CORE_VALUES.iter().enumerate() {
                        div {
                            key: "{value.title}",
                            class: "core-value",
                            style: "transition-delay: {(index + 1) * 100}ms",
                            div { class: "value-icon",
                                Glyph { icon: value.icon }
                            }
                            h3 { class: "serif", "{value.title}" }
                            p { "{value.body}" }
                        }
                    }
                }
            }

            section { class: "about-section tinted",
                div { id: "{science.id}", class: "container narrow {science.class()}",
                    div { class: "card science-card",
                        div { class: "science-icon",
                            Glyph { icon: Icon::BookOpen }
                        }
                        div {
                            p { class: "kicker", "Scientific Foundation" }
                            h3 { class: "serif", "Rooted in Learning Science" }
                            p { class: "lead",
                                "Medhavy's AI isn't just intelligent; it's pedagogically grounded. Our system leverages "
                                span { class: "text-primary strong", "Vygotsky's Zone of Proximal Development (ZPD)" }
                                " and "
                                span { class: "text-primary strong", "Scaffolded Learning" }
                                " principles to ensure every interaction meets students exactly where they are, "
                                "providing just-in-time support that builds genuine understanding."
                            }
                            div { class: "principles",
                                for (title, body) in LEARNING_PRINCIPLES {
                                    div { key: "{title}", class: "principle",
                                        Glyph { icon: Icon::Lightbulb, class: "text-primary" }
                                        div {
                                            p { class: "strong", "{title}" }
                                            p { class: "small", "{body}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "about-section",
                div { class: "container narrow centered",
                    h2 { class: "serif", "Ready to Transform Your Teaching?" }
                    p { class: "lead",
                        "Join the growing community of educators using Medhavy to create intelligent, "
                        "personalized learning experiences."
                    }
                    div { class: "cta-actions centered",
                        Button {
                            size: ButtonSize::Large,
                            arrow: true,
                            onclick: move |_| modal.open(ModalKind::Demo),
                            "Request a Demo"
                        }
                        Button {
                            size: ButtonSize::Large,
                            variant: ButtonVariant::Outline,
                            onclick: move |_| modal.open(ModalKind::Contact),
                            "Contact Us"
                        }
                    }
                }
            }

            Footer { modal }
        }
    }
}

/// "Intellectually Brilliant", typed out once the heading is half on screen.
#[component]
fn TypewriterHeading() -> Element {
    let heading = use_visibility(HEADING_THRESHOLD);
    let speed_ms = ABOUT_HEADING_CHAR_DELAY.as_millis() as u64;

    rsx! {
        span { id: "{heading.id}", class: "typewriter-slot",
            if heading.is_visible() {
                TypewriterText { text: ABOUT_HEADING.to_string(), speed_ms, cursor: true }
            }
        }
    }
}
