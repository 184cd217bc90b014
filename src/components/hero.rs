//! Hero: rotating headline word, calls to action, and the feature carousel.

use dioxus::prelude::*;
use medhavy_core::carousel::DEFAULT_INTERVAL;
use medhavy_core::content::{HERO_SLIDES, HERO_TIMING, HERO_WORDS};
use medhavy_core::{Icon, ModalKind};
use medhavy_ui::{use_carousel, Button, ButtonSize, ButtonVariant, Glyph, IconButton, Typewriter};

use crate::context::ModalHandle;

#[component]
pub fn HeroSection(modal: ModalHandle) -> Element {
    let mut carousel = use_carousel(HERO_SLIDES.to_vec(), DEFAULT_INTERVAL);
    let mut entered = use_signal(|| false);

    // Fade in after the first paint
    use_effect(move || entered.set(true));

    let words: Vec<String> = HERO_WORDS.iter().map(|word| word.to_string()).collect();
    let enter_class = if entered() { "enter entered" } else { "enter" };
    let current = carousel
        .read()
        .as_ref()
        .map(|slides| (slides.active_index(), *slides.active()));

    rsx! {
        section { class: "hero",
            div { class: "hero-glow hero-glow-left" }
            div { class: "hero-glow hero-glow-right" }

            div { class: "container hero-grid",
                div { class: "hero-copy {enter_class}",
                    div { class: "pill",
                        Glyph { icon: Icon::Sparkles }
                        "AI-Powered Education Platform"
                    }

                    h1 { class: "hero-title",
                        span { "Transform Static" }
                        span { "Textbooks Into" }
                        span {
                            Typewriter { words, timing: HERO_TIMING, class: "text-primary" }
                        }
                        span { "Courses" }
                    }

                    p { class: "hero-lead",
                        "B Wells turns any textbook into a personalized, AI-curated conversational "
                        "learning experience inside any LTI-compliant LMS."
                    }

                    div { class: "hero-actions",
                        Button {
                            size: ButtonSize::Large,
                            onclick: move |_| modal.open(ModalKind::Demo),
                            "Request a Demo"
                        }
                        Button {
                            size: ButtonSize::Large,
                            variant: ButtonVariant::Outline,
                            onclick: move |_| modal.open(ModalKind::LearnMore),
                            "Learn More"
                        }
                    }
                }

                if let Some((active, slide)) = current {
                    div { class: "hero-stage {enter_class} delayed",
                        div { class: "carousel",
                            div { class: "carousel-dots",
                                for index in 0..HERO_SLIDES.len() {
                                    button {
                                        key: "{index}",
                                        class: if index == active { "dot active" } else { "dot" },
                                        "aria-label": "Go to slide {index + 1}",
                                        onclick: move |_| {
                                            if let Some(slides) = carousel.write().as_mut() {
                                                if let Err(e) = slides.select(index) {
                                                    tracing::warn!("Slide selection ignored: {}", e);
                                                }
                                            }
                                        },
                                    }
                                }
                            }

                            div { key: "{active}", class: "carousel-slide",
                                div { class: "slide-icon",
                                    Glyph { icon: slide.icon }
                                }
                                h3 { "{slide.title}" }
                                p { "{slide.description}" }
                            }

                            IconButton {
                                icon: Icon::ChevronLeft,
                                aria_label: "Previous slide",
                                class: "carousel-arrow prev".to_string(),
                                onclick: move |_| {
                                    if let Some(slides) = carousel.write().as_mut() {
                                        slides.previous();
                                    }
                                },
                            }
                            IconButton {
                                icon: Icon::ChevronRight,
                                aria_label: "Next slide",
                                class: "carousel-arrow next".to_string(),
                                onclick: move |_| {
                                    if let Some(slides) = carousel.write().as_mut() {
                                        slides.next();
                                    }
                                },
                            }

                            div { class: "grid-texture" }
                        }

                        div { class: "badge badge-top", "Built for Educators" }
                        div { class: "badge badge-bottom", "LTI Compliant" }
                    }
                }
            }
        }
    }
}
