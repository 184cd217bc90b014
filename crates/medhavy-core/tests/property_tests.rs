//! Property-based tests for the animation primitives
//!
//! Uses proptest to verify invariants of the typewriter, counter, carousel
//! and visibility state machines.

use std::time::Duration;

use medhavy_core::{
    Carousel, CountUp, CyclingTypewriter, RevealText, TypewriterPhase, TypewriterTiming,
    VisibilityTrigger,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Word lists with at least one typeable word, including multi-byte characters
fn word_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[a-zA-Zéß中 ]{0,12}").expect("valid regex"),
        1..6,
    )
    .prop_filter("at least one word has text", |words| {
        words.iter().any(|word| !word.is_empty())
    })
}

fn timing() -> TypewriterTiming {
    TypewriterTiming::from_millis(1, 1, 1)
}

/// Operations on a carousel
#[derive(Debug, Clone)]
enum CarouselOp {
    Advance,
    Next,
    Previous,
    Select(usize),
}

fn carousel_ops_strategy() -> impl Strategy<Value = Vec<CarouselOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(CarouselOp::Advance),
            2 => Just(CarouselOp::Next),
            2 => Just(CarouselOp::Previous),
            1 => (0..20usize).prop_map(CarouselOp::Select),
        ],
        0..60,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Displayed text is always a prefix of the word being typed
    #[test]
    fn typewriter_text_is_prefix(words in word_list_strategy(), ticks in 0usize..400) {
        let mut tw = CyclingTypewriter::new(words, timing()).unwrap();
        for _ in 0..ticks {
            tw.step();
            prop_assert!(tw.current_word().starts_with(tw.text()));
        }
    }

    /// A full cycle visits every word in order, then wraps to the first
    #[test]
    fn typewriter_visits_words_in_order(words in word_list_strategy()) {
        let mut tw = CyclingTypewriter::new(words.clone(), timing()).unwrap();
        let mut completed = Vec::new();
        let mut guard = 0;
        while completed.len() < words.len() {
            if tw.phase() == TypewriterPhase::Pausing {
                completed.push(tw.text().to_string());
            }
            tw.step();
            guard += 1;
            prop_assert!(guard < 10_000, "typewriter stalled");
        }
        prop_assert_eq!(&completed, &words);
        while tw.phase() != TypewriterPhase::Typing || !tw.text().is_empty() {
            tw.step();
        }
        prop_assert_eq!(tw.word_index(), 0);
    }

    /// Reveal reports completion exactly once and ends on the full text
    #[test]
    fn reveal_completes_once(text in ".{0,40}") {
        let mut reveal = RevealText::new(text.clone(), Duration::from_millis(1));
        let mut completions = 0;
        for _ in 0..(text.chars().count() + 5) {
            if reveal.step() == medhavy_core::RevealProgress::Completed {
                completions += 1;
            }
            prop_assert!(text.starts_with(reveal.text()));
        }
        prop_assert_eq!(completions, 1);
        prop_assert_eq!(reveal.text(), text.as_str());
    }

    /// The final counter step equals every target exactly
    #[test]
    fn counter_lands_on_targets(
        targets in prop::collection::vec(0i64..100_000, 1..5),
        steps in 1u32..240,
    ) {
        let mut counter = CountUp::new(targets.clone(), Duration::from_millis(2000), steps).unwrap();
        let mut last = counter.values();
        for _ in 0..steps {
            let next = counter.tick();
            for (before, after) in last.iter().zip(&next) {
                prop_assert!(after >= before);
            }
            last = next;
        }
        prop_assert_eq!(last, targets);
    }

    /// N automatic advances bring an N-slide carousel back to where it was
    #[test]
    fn carousel_full_lap_returns(len in 1usize..12, start in 0usize..12) {
        let mut carousel = Carousel::new((0..len).collect::<Vec<_>>(), Duration::from_secs(5)).unwrap();
        let start = start % len;
        carousel.select(start).unwrap();
        for _ in 0..len {
            carousel.advance();
        }
        prop_assert_eq!(carousel.active_index(), start);
    }

    /// next then previous is the identity, and the index stays in range
    #[test]
    fn carousel_ops_stay_in_range(len in 1usize..8, ops in carousel_ops_strategy()) {
        let mut carousel = Carousel::new(vec![(); len], Duration::from_secs(5)).unwrap();
        for op in ops {
            match op {
                CarouselOp::Advance => carousel.advance(),
                CarouselOp::Next => carousel.next(),
                CarouselOp::Previous => carousel.previous(),
                CarouselOp::Select(i) => {
                    let result = carousel.select(i);
                    prop_assert_eq!(result.is_ok(), i < len);
                }
            }
            prop_assert!(carousel.active_index() < len);

            let here = carousel.active_index();
            carousel.next();
            carousel.previous();
            prop_assert_eq!(carousel.active_index(), here);
        }
    }

    /// Visibility flips at most once and never reverts
    #[test]
    fn visibility_is_monotonic(
        threshold in 0.0f64..=1.0,
        ratios in prop::collection::vec(0.0f64..=1.0, 0..30),
    ) {
        let mut trigger = VisibilityTrigger::new(threshold).unwrap();
        let mut flips = 0;
        let mut seen_visible = false;
        for ratio in ratios {
            if trigger.observe(ratio) {
                flips += 1;
            }
            if seen_visible {
                prop_assert!(trigger.is_visible());
            }
            seen_visible = trigger.is_visible();
        }
        prop_assert!(flips <= 1);
    }
}
