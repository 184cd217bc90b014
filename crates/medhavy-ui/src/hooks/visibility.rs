//! Scroll reveal hook backed by the browser's IntersectionObserver.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use medhavy_core::VisibilityTrigger;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Observer registration. The observer reports every ratio change until
/// Rust asks for it to be released.
const OBSERVE_JS: &str = r#"
const id = "__ID__";
const threshold = __THRESHOLD__;
window.__revealObservers = window.__revealObservers || {};
let attempts = 0;
function attach() {
    const el = document.getElementById(id);
    if (!el) {
        if (attempts++ < 120) requestAnimationFrame(attach);
        return;
    }
    const observer = new IntersectionObserver((entries) => {
        for (const entry of entries) {
            dioxus.send(entry.isIntersecting ? entry.intersectionRatio : 0);
        }
    }, { threshold: [0, threshold] });
    observer.observe(el);
    window.__revealObservers[id] = observer;
}
attach();
"#;

const RELEASE_JS: &str = r#"
const observers = window.__revealObservers;
if (observers && observers["__ID__"]) {
    observers["__ID__"].disconnect();
    delete observers["__ID__"];
}
"#;

/// Handle returned by [`use_visibility`].
///
/// Put `id` on the element to observe; read `visible` to drive the reveal.
#[derive(Clone, PartialEq)]
pub struct Visibility {
    pub id: String,
    pub visible: Signal<bool>,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        (self.visible)()
    }

    /// CSS class for reveal transitions: `revealed` once visible.
    pub fn class(&self) -> &'static str {
        reveal_class(self.is_visible())
    }
}

pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal revealed"
    } else {
        "reveal"
    }
}

/// Flip to `true` the first time the element with `id` shows at least
/// `threshold` of itself in the viewport. Never flips back.
///
/// The observer is disconnected on the first flip, and again on unmount in
/// case the element never became visible. A missing element is a no-op.
pub fn use_visibility(threshold: f64) -> Visibility {
    let id = use_hook(|| format!("reveal-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)));
    let mut visible = use_signal(|| false);

    let observe_id = id.clone();
    use_future(move || {
        let id = observe_id.clone();
        async move {
            let trigger = match VisibilityTrigger::new(threshold) {
                Ok(trigger) => trigger,
                Err(e) => {
                    tracing::warn!("Visibility observer not started: {}", e);
                    return;
                }
            };

            let script = OBSERVE_JS
                .replace("__ID__", &id)
                .replace("__THRESHOLD__", &threshold.to_string());
            let mut observer = document::eval(&script);
            if let Some(ratio) = watch_until_revealed(trigger, &mut observer, || release(&id)).await {
                tracing::debug!(element = %id, ratio, "Element revealed");
                visible.set(true);
            }
        }
    });

    let drop_id = id.clone();
    use_drop(move || release(&drop_id));

    Visibility { id, visible }
}

/// Intersection ratios reported for one observed element.
trait RatioSource {
    /// Next reported ratio, or `None` once the source has closed.
    async fn next_ratio(&mut self) -> Option<f64>;
}

impl RatioSource for document::Eval {
    async fn next_ratio(&mut self) -> Option<f64> {
        self.recv::<f64>().await.ok()
    }
}

/// Feed ratios to `trigger` until it flips or the source closes, then
/// call `release` exactly once. Returns the ratio that revealed the element.
async fn watch_until_revealed<S: RatioSource>(
    mut trigger: VisibilityTrigger,
    source: &mut S,
    release: impl FnOnce(),
) -> Option<f64> {
    let mut revealed = None;
    while let Some(ratio) = source.next_ratio().await {
        if trigger.observe(ratio) {
            revealed = Some(ratio);
            break;
        }
    }
    release();
    revealed
}

fn release(id: &str) {
    let _ = document::eval(&RELEASE_JS.replace("__ID__", id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn reveal_classes() {
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal revealed");
    }

    impl RatioSource for VecDeque<f64> {
        async fn next_ratio(&mut self) -> Option<f64> {
            self.pop_front()
        }
    }

    #[tokio::test]
    async fn releases_observer_on_first_reveal() {
        let trigger = VisibilityTrigger::new(0.3).unwrap();
        let mut ratios = VecDeque::from([0.0, 0.1, 0.35, 0.9, 0.0]);
        let mut releases = 0;

        let revealed = watch_until_revealed(trigger, &mut ratios, || releases += 1).await;

        assert_eq!(revealed, Some(0.35));
        assert_eq!(releases, 1);
        // Later reports are never read
        assert_eq!(ratios, VecDeque::from([0.9, 0.0]));
    }

    #[tokio::test]
    async fn releases_observer_when_reports_stop() {
        let trigger = VisibilityTrigger::new(0.5).unwrap();
        let mut ratios = VecDeque::from([0.2, 0.49]);
        let mut releases = 0;

        let revealed = watch_until_revealed(trigger, &mut ratios, || releases += 1).await;

        assert_eq!(revealed, None);
        assert_eq!(releases, 1);
        assert!(ratios.is_empty());
    }

    #[test]
    fn release_script_tolerates_repeat_calls() {
        // Unmount releases again after a reveal already did
        assert!(RELEASE_JS.contains(r#"if (observers && observers["__ID__"])"#));
        assert!(RELEASE_JS.contains(r#"delete observers["__ID__"]"#));
    }

    #[test]
    fn scripts_have_placeholders() {
        assert!(OBSERVE_JS.contains("__ID__"));
        assert!(OBSERVE_JS.contains("__THRESHOLD__"));
        assert!(RELEASE_JS.contains("__ID__"));
    }
}
