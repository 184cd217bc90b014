//! Site footer: closing call to action, link columns, newsletter signup.

use dioxus::prelude::*;
use medhavy_core::content::{
    COMPANY_LINKS, FOOTER_BRAND, FOOTER_TIMING, FOOTER_WORDS, LEGAL_LINKS, PRODUCT_LINKS,
};
use medhavy_core::nav::{NavTarget, NAV_LINKS};
use medhavy_core::{FormSubmitter, Icon, ModalKind, NewsletterSignup, SimulatedSubmitter};
use medhavy_ui::{Button, ButtonSize, ButtonVariant, Glyph, IconButton, Typewriter};

use crate::app::Route;
use crate::components::navigation::follow_link;
use crate::context::{settings, ModalHandle};

/// Header target for a product link label, if the site has that section.
fn product_target(label: &str) -> Option<NavTarget> {
    NAV_LINKS
        .iter()
        .find(|link| link.label == label)
        .map(|link| link.target)
}

#[component]
pub fn Footer(modal: ModalHandle) -> Element {
    let navigator = use_navigator();
    let on_home = matches!(use_route::<Route>(), Route::Home {});
    let words: Vec<String> = FOOTER_WORDS.iter().map(|word| word.to_string()).collect();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-cta",
                    div { class: "cta-glow cta-glow-top" }
                    div { class: "cta-glow cta-glow-bottom" }
                    div { class: "cta-body",
                        div { class: "cta-copy",
                            h2 {
                                Typewriter { words, timing: FOOTER_TIMING }
                            }
                            p {
                                "Medhavy turns textbooks into AI-curated, conversational courses inside any "
                                "LTI-compliant LMS, reducing faculty workload and giving students effortless "
                                "access to knowledge."
                            }
                        }
                        div { class: "cta-actions",
                            Button {
                                size: ButtonSize::Large,
                                variant: ButtonVariant::Secondary,
                                arrow: true,
                                onclick: move |_| modal.open(ModalKind::Demo),
                                "Request a Demo"
                            }
                            Button {
                                size: ButtonSize::Large,
                                variant: ButtonVariant::Outline,
                                class: "on-dark".to_string(),
                                onclick: move |_| modal.open(ModalKind::LearnMore),
                                "Learn More"
                            }
                        }
                    }
                }

                div { class: "footer-columns",
                    div { class: "footer-brand",
                        Link { to: Route::Home {}, class: "brand",
                            div { class: "brand-mark",
                                Glyph { icon: Icon::Sparkles }
                            }
                            span { class: "brand-name", "{FOOTER_BRAND}" }
                        }
                        p {
                            "Built by educators, for educators. Led by Professor Sridhar Srinivas with "
                            "support from Humanitarians AI fellows."
                        }
                        div { class: "social",
                            for (icon, label) in [(Icon::MessageSquare, "Twitter"), (Icon::Users, "LinkedIn"), (Icon::Mail, "Email")] {
                                IconButton {
                                    key: "{label}",
                                    icon,
                                    aria_label: label.to_string(),
                                    class: "social-button".to_string(),
                                    onclick: move |_| modal.open(ModalKind::Contact),
                                }
                            }
                        }
                    }

                    div {
                        h4 { "Product" }
                        ul { class: "footer-links",
                            for label in PRODUCT_LINKS {
                                li { key: "{label}",
                                    {match product_target(label) {
                                        Some(target) => rsx! {
                                            button {
                                                class: "footer-link",
                                                onclick: move |_| follow_link(target, on_home, navigator),
                                                "{label}"
                                            }
                                        },
                                        None => rsx! {
                                            span { class: "footer-link muted", "{label}" }
                                        },
                                    }}
                                }
                            }
                        }
                    }

                    div {
                        h4 { "Company" }
                        ul { class: "footer-links",
                            for label in COMPANY_LINKS {
                                li { key: "{label}",
                                    button {
                                        class: "footer-link",
                                        onclick: move |_| modal.open(ModalKind::Contact),
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }

                    NewsletterForm {}
                }

                div { class: "footer-bottom",
                    p { "\u{A9} 2026 - 2027 Medhavy. All rights reserved." }
                    div { class: "legal-links",
                        for label in LEGAL_LINKS {
                            button {
                                key: "{label}",
                                class: "footer-link",
                                onclick: move |_| modal.open(ModalKind::Contact),
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Email signup. One subscription per mount; the confirmation replaces the form.
#[component]
fn NewsletterForm() -> Element {
    let mut signup = use_signal(NewsletterSignup::new);
    let delay = settings().newsletter_delay();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let started = signup.write().submit();
        let submission = match started {
            Ok(submission) => submission,
            Err(e) => {
                tracing::warn!("Newsletter signup not sent: {}", e);
                return;
            }
        };
        spawn(async move {
            let result = SimulatedSubmitter::new(delay).submit(&submission).await;
            signup.write().finish(result);
        });
    };

    let subscribed = signup.read().is_subscribed();
    let submitting = signup.read().is_submitting();
    let email = signup.read().email().to_string();

    rsx! {
        div { class: "newsletter",
            h4 { "Stay Updated" }
            p { "Get the latest updates on AI in education." }
            if subscribed {
                p { class: "confirmation", {NewsletterSignup::CONFIRMATION} }
            } else {
                form { class: "newsletter-form", onsubmit: on_submit,
                    input {
                        r#type: "email",
                        placeholder: "Enter your email",
                        required: true,
                        value: "{email}",
                        disabled: submitting,
                        oninput: move |evt| signup.write().set_email(evt.value()),
                    }
                    Button {
                        button_type: "submit",
                        size: ButtonSize::Icon,
                        disabled: submitting,
                        if submitting {
                            span { class: "spinner" }
                        } else {
                            Glyph { icon: Icon::ArrowRight }
                        }
                    }
                }
            }
        }
    }
}
