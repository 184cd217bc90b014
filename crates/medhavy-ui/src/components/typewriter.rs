//! Typewriter text components.

use std::time::Duration;

use dioxus::prelude::*;
use medhavy_core::{CyclingTypewriter, RevealProgress, RevealText, TypewriterTiming};

/// Cycles through `words`: type, pause, delete, next word, forever.
///
/// An empty word list renders nothing.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Typewriter {
///         words: vec!["Intelligent".into(), "Engaging".into()],
///         timing: TypewriterTiming::from_millis(120, 80, 2500),
///         class: "text-primary".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Typewriter(
    words: Vec<String>,
    #[props(default)] timing: TypewriterTiming,
    #[props(default)] class: String,
) -> Element {
    let mut state = use_signal(|| match CyclingTypewriter::new(words.clone(), timing) {
        Ok(typewriter) => Some(typewriter),
        Err(e) => {
            tracing::warn!("Typewriter disabled: {}", e);
            None
        }
    });

    // Restarts only on remount; the task dies with the component.
    use_future(move || async move {
        loop {
            let Some(delay) = state.peek().as_ref().map(CyclingTypewriter::next_delay) else {
                return;
            };
            tokio::time::sleep(delay).await;
            if let Some(typewriter) = state.write().as_mut() {
                typewriter.step();
            }
        }
    });

    let Some(text) = state.read().as_ref().map(|tw| tw.text().to_string()) else {
        return rsx! {};
    };

    rsx! {
        span { class: "typewriter {class}",
            "{text}"
            span { class: "typewriter-cursor", "|" }
        }
    }
}

/// Reveals `text` once, one character per tick, after an optional delay.
///
/// `on_complete` fires exactly once when the last character appears.
#[component]
pub fn TypewriterText(
    text: String,
    #[props(default = 30)] speed_ms: u64,
    #[props(default = 0)] delay_ms: u64,
    /// Show a blinking cursor while typing
    #[props(default = false)]
    cursor: bool,
    #[props(default)] class: String,
    on_complete: Option<EventHandler<()>>,
) -> Element {
    let mut reveal = use_signal(|| {
        RevealText::new(text.clone(), Duration::from_millis(speed_ms))
            .with_start_delay(Duration::from_millis(delay_ms))
    });

    use_future(move || async move {
        loop {
            let next = reveal.peek().next_delay();
            let Some(delay) = next else {
                return;
            };
            tokio::time::sleep(delay).await;
            if reveal.write().step() == RevealProgress::Completed {
                if let Some(handler) = on_complete {
                    handler.call(());
                }
            }
        }
    });

    let shown = reveal.read().text().to_string();
    let typing = reveal.read().is_typing();

    rsx! {
        span { class: "typewriter-text {class}",
            "{shown}"
            if cursor && typing {
                span { class: "typewriter-cursor", "|" }
            }
        }
    }
}
