//! Icon placeholder glyphs.

use dioxus::prelude::*;
use medhavy_core::Icon;

#[component]
pub fn Glyph(icon: Icon, #[props(default)] class: String) -> Element {
    rsx! {
        span {
            class: "glyph {class}",
            role: "img",
            "aria-label": "{icon.label()}",
            "{icon.glyph()}"
        }
    }
}
