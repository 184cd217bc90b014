//! Site header
//!
//! Desktop: brand, section links, contact and get-started buttons.
//! Mobile: brand and a menu toggle that folds the same links out below.

use dioxus::prelude::*;
use medhavy_core::content::BRAND;
use medhavy_core::nav::{MobileMenu, NavTarget, NAV_LINKS};
use medhavy_core::{Icon, ModalKind};
use medhavy_ui::{use_scrolled, Button, ButtonVariant, Glyph, IconButton};

use crate::app::Route;
use crate::context::ModalHandle;

/// Scrolls to a section once it exists in the document.
const SCROLL_JS: &str = r#"
let attempts = 0;
function go() {
    const el = document.getElementById("__ID__");
    if (el) {
        el.scrollIntoView({ behavior: "smooth", block: "start" });
    } else if (attempts++ < 120) {
        requestAnimationFrame(go);
    }
}
go();
"#;

/// Smooth-scroll to the home page section with `id`.
pub fn scroll_to_section(id: &str) {
    let _ = document::eval(&SCROLL_JS.replace("__ID__", id));
}

/// Follow a header link, leaving the about page first for home sections.
pub fn follow_link(target: NavTarget, on_home: bool, navigator: Navigator) {
    match target {
        NavTarget::Section(id) => {
            if !on_home {
                navigator.push(Route::Home {});
            }
            scroll_to_section(id);
        }
        NavTarget::About => {
            navigator.push(Route::About {});
        }
    }
}

#[component]
pub fn Navigation(modal: ModalHandle) -> Element {
    let navigator = use_navigator();
    let on_home = matches!(use_route::<Route>(), Route::Home {});
    let scrolled = use_scrolled();
    let mut menu = use_signal(MobileMenu::default);

    let header_class = if scrolled() { "site-header scrolled" } else { "site-header" };
    let menu_open = menu.read().is_open();

    rsx! {
        header { class: "{header_class}",
            div { class: "container header-bar",
                Link { to: Route::Home {}, class: "brand",
                    div { class: "brand-mark",
                        Glyph { icon: Icon::Sparkles }
                    }
                    span { class: "brand-name", "{BRAND}" }
                }

                nav { class: "header-links",
                    for link in NAV_LINKS {
                        button {
                            key: "{link.label}",
                            class: "nav-link",
                            onclick: move |_| follow_link(link.target, on_home, navigator),
                            "{link.label}"
                        }
                    }
                }

                div { class: "header-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| modal.open(ModalKind::Contact),
                        "Contact Us"
                    }
                    Button {
                        onclick: move |_| modal.open(ModalKind::GetStarted),
                        "Get Started"
                    }
                }

                IconButton {
                    icon: if menu_open { Icon::Close } else { Icon::Menu },
                    aria_label: "Toggle menu",
                    class: "menu-toggle".to_string(),
                    onclick: move |_| menu.write().toggle(),
                }
            }

            div { class: if menu_open { "mobile-menu open" } else { "mobile-menu" },
                nav { class: "container mobile-links",
                    for link in NAV_LINKS {
                        button {
                            key: "{link.label}",
                            class: "nav-link",
                            onclick: move |_| {
                                menu.write().close();
                                follow_link(link.target, on_home, navigator);
                            },
                            "{link.label}"
                        }
                    }
                    div { class: "mobile-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                modal.open(ModalKind::Contact);
                                menu.write().close();
                            },
                            "Contact Us"
                        }
                        Button {
                            onclick: move |_| {
                                modal.open(ModalKind::GetStarted);
                                menu.write().close();
                            },
                            "Get Started"
                        }
                    }
                }
            }
        }
    }
}
