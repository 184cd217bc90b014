//! Timer-driven animation hooks.

use std::time::Duration;

use dioxus::prelude::*;
use medhavy_core::{Carousel, CountUp};
use tokio::time::MissedTickBehavior;

/// Count every target up from zero once `visible` turns true.
///
/// One-shot per mount: later visibility changes do not restart it.
pub fn use_count_up(targets: Vec<i64>, visible: Signal<bool>) -> Signal<Vec<i64>> {
    let mut counter = use_signal(|| CountUp::with_defaults(targets));
    let mut values = use_signal(|| counter.peek().values());

    use_effect(move || {
        if !start_on_reveal(visible(), || counter.write().start()) {
            return;
        }
        spawn(async move {
            let tick = counter.peek().tick_interval();
            run_count_up(tick, move || {
                let mut counter = counter.write();
                values.set(counter.tick());
                counter.is_finished()
            })
            .await;
        });
    });

    values
}

/// Whether a visibility change should launch the count-up.
///
/// `start` claims the counter and is only consulted while visible.
fn start_on_reveal(visible: bool, start: impl FnOnce() -> bool) -> bool {
    visible && start()
}

/// Call `step` once per `tick` until it reports the count finished.
async fn run_count_up(tick: Duration, mut step: impl FnMut() -> bool) {
    loop {
        tokio::time::sleep(tick).await;
        if step() {
            break;
        }
    }
}

/// Carousel with an auto-advance timer running from mount to unmount.
///
/// Manual moves go through the returned signal and leave the timer's
/// schedule untouched. An empty slide list yields `None`.
pub fn use_carousel<T: 'static>(slides: Vec<T>, interval: Duration) -> Signal<Option<Carousel<T>>> {
    let mut carousel = use_signal(|| match Carousel::new(slides, interval) {
        Ok(carousel) => Some(carousel),
        Err(e) => {
            tracing::warn!("Carousel disabled: {}", e);
            None
        }
    });

    use_future(move || async move {
        let Some(period) = carousel.peek().as_ref().map(Carousel::interval) else {
            return;
        };
        auto_advance(period, move || {
            if let Some(carousel) = carousel.write().as_mut() {
                carousel.advance();
            }
        })
        .await;
    });

    carousel
}

/// Call `advance` on every `period` boundary measured from the first poll.
///
/// Never reads carousel state, so manual moves cannot shift the schedule.
async fn auto_advance(period: Duration, mut advance: impl FnMut()) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;
    loop {
        ticker.tick().await;
        advance();
    }
}

/// Turns true `delay` after `trigger` does, and stays true.
pub fn use_delayed_flag(trigger: Signal<bool>, delay: Duration) -> Signal<bool> {
    let mut flag = use_signal(|| false);
    let mut scheduled = use_signal(|| false);

    use_effect(move || {
        if !trigger() || *scheduled.peek() {
            return;
        }
        scheduled.set(true);
        spawn(async move {
            tokio::time::sleep(delay).await;
            flag.set(true);
        });
    });

    flag
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::time::Instant;

    fn slides() -> Arc<Mutex<Carousel<&'static str>>> {
        let carousel = Carousel::new(vec!["a", "b", "c"], Duration::from_millis(5000)).unwrap();
        Arc::new(Mutex::new(carousel))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[tokio::test(start_paused = true)]
    async fn manual_select_keeps_the_advance_schedule() {
        let carousel = slides();
        let timer = {
            let carousel = carousel.clone();
            tokio::spawn(auto_advance(ms(5000), move || carousel.lock().unwrap().advance()))
        };
        tokio::task::yield_now().await;

        // Halfway through the first interval
        tokio::time::sleep(ms(2500)).await;
        carousel.lock().unwrap().select(2).unwrap();

        tokio::time::sleep(ms(2499)).await;
        assert_eq!(carousel.lock().unwrap().active_index(), 2);

        // Advances on the original 5 s boundary, from the manual position
        tokio::time::sleep(ms(2)).await;
        assert_eq!(carousel.lock().unwrap().active_index(), 0);

        timer.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn arrows_do_not_pause_auto_advance() {
        let carousel = slides();
        let timer = {
            let carousel = carousel.clone();
            tokio::spawn(auto_advance(ms(5000), move || carousel.lock().unwrap().advance()))
        };
        tokio::task::yield_now().await;

        tokio::time::sleep(ms(4000)).await;
        carousel.lock().unwrap().next();
        carousel.lock().unwrap().previous();
        carousel.lock().unwrap().previous();
        assert_eq!(carousel.lock().unwrap().active_index(), 2);

        tokio::time::sleep(ms(1001)).await;
        assert_eq!(carousel.lock().unwrap().active_index(), 0);
        tokio::time::sleep(ms(5000)).await;
        assert_eq!(carousel.lock().unwrap().active_index(), 1);

        timer.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn count_up_runs_once_per_mount() {
        let mut counter = CountUp::new(vec![120, 6, 95], ms(100), 10).unwrap();
        let mut shown = Vec::new();
        let mut runs = 0;

        // Hidden: the counter is never claimed
        assert!(!start_on_reveal(false, || counter.start()));
        assert!(!counter.is_started());

        for _ in 0..2 {
            if !start_on_reveal(true, || counter.start()) {
                continue;
            }
            runs += 1;
            let began = Instant::now();
            run_count_up(counter.tick_interval(), || {
                shown = counter.tick();
                counter.is_finished()
            })
            .await;
            assert!(began.elapsed() >= ms(100));
        }

        assert_eq!(runs, 1, "second reveal must not restart the count");
        assert_eq!(shown, vec![120, 6, 95]);
        assert_eq!(counter.values(), vec![120, 6, 95]);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_until_step_reports_finished() {
        let began = Instant::now();
        let mut steps = 0;
        run_count_up(ms(40), || {
            steps += 1;
            steps == 3
        })
        .await;
        assert_eq!(steps, 3);
        assert!(began.elapsed() >= ms(120));
    }
}
