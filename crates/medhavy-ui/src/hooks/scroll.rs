//! Window scroll tracking.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use medhavy_core::nav::is_scrolled;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

const LISTEN_JS: &str = r#"
window.__scrollListeners = window.__scrollListeners || {};
const handler = () => dioxus.send(window.scrollY);
window.addEventListener("scroll", handler, { passive: true });
window.__scrollListeners["__ID__"] = handler;
handler();
"#;

const UNLISTEN_JS: &str = r#"
const listeners = window.__scrollListeners;
if (listeners && listeners["__ID__"]) {
    window.removeEventListener("scroll", listeners["__ID__"]);
    delete listeners["__ID__"];
}
"#;

/// True while the page is scrolled past the header threshold.
pub fn use_scrolled() -> Signal<bool> {
    let id = use_hook(|| format!("scroll-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)));
    let mut scrolled = use_signal(|| false);

    let listen_id = id.clone();
    use_future(move || {
        let script = LISTEN_JS.replace("__ID__", &listen_id);
        async move {
            let mut listener = document::eval(&script);
            while let Ok(offset) = listener.recv::<f64>().await {
                let now = is_scrolled(offset);
                if now != *scrolled.peek() {
                    scrolled.set(now);
                }
            }
        }
    });

    use_drop(move || {
        let _ = document::eval(&UNLISTEN_JS.replace("__ID__", &id));
    });

    scrolled
}
