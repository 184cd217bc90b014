//! Typewriter text effects.
//!
//! Two state machines drive the animated headings:
//!
//! - [`CyclingTypewriter`] types a word, pauses, deletes it and moves on to
//!   the next word, forever.
//! - [`RevealText`] reveals one fixed string once, then reports completion.
//!
//! Both are clock-free: the UI asks for the delay before the next step,
//! sleeps, then calls `step()`. All positions count Unicode scalar values so
//! a multi-byte character is never split.

use std::time::Duration;

use crate::error::{SiteError, SiteResult};

/// Timing for the cycling typewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay between typed characters
    pub typing: Duration,
    /// Delay between deleted characters
    pub deleting: Duration,
    /// Hold time once a word is fully typed
    pub pause: Duration,
}

impl TypewriterTiming {
    pub const fn from_millis(typing: u64, deleting: u64, pause: u64) -> Self {
        Self {
            typing: Duration::from_millis(typing),
            deleting: Duration::from_millis(deleting),
            pause: Duration::from_millis(pause),
        }
    }
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self::from_millis(100, 50, 2000)
    }
}

/// What the cycling typewriter is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    /// Full word on screen, waiting before deletion starts
    Pausing,
    Deleting,
}

/// Endless type / pause / delete / advance loop over a word list.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclingTypewriter {
    words: Vec<String>,
    timing: TypewriterTiming,
    word_index: usize,
    text: String,
    phase: TypewriterPhase,
}

impl CyclingTypewriter {
    /// Build a typewriter; at least one word must have text.
    pub fn new<I, S>(words: I, timing: TypewriterTiming) -> SiteResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.iter().all(String::is_empty) {
            return Err(SiteError::EmptyWordList);
        }
        Ok(Self {
            words,
            timing,
            word_index: 0,
            text: String::new(),
            phase: TypewriterPhase::Typing,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.word_index]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == TypewriterPhase::Deleting
    }

    /// How long to wait before calling [`step`](Self::step) again.
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            TypewriterPhase::Typing => self.timing.typing,
            TypewriterPhase::Pausing => self.timing.pause,
            TypewriterPhase::Deleting => self.timing.deleting,
        }
    }

    /// Advance the animation by one tick.
    pub fn step(&mut self) {
        match self.phase {
            TypewriterPhase::Typing => {
                let shown = self.text.chars().count();
                if let Some(next) = self.words[self.word_index].chars().nth(shown) {
                    self.text.push(next);
                }
                if self.text.len() == self.words[self.word_index].len() {
                    self.phase = TypewriterPhase::Pausing;
                }
            }
            TypewriterPhase::Pausing => {
                self.phase = TypewriterPhase::Deleting;
                if self.text.is_empty() {
                    self.advance_word();
                }
            }
            TypewriterPhase::Deleting => {
                self.text.pop();
                if self.text.is_empty() {
                    self.advance_word();
                }
            }
        }
    }

    fn advance_word(&mut self) {
        self.word_index = (self.word_index + 1) % self.words.len();
        self.phase = TypewriterPhase::Typing;
    }
}

/// Outcome of one [`RevealText::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealProgress {
    /// Start delay still pending
    Waiting,
    /// Another character became visible
    Revealing,
    /// The whole text is visible; returned exactly once
    Completed,
    /// Already complete; nothing left to do
    Finished,
}

/// Single forward pass over a fixed string.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealText {
    target: String,
    char_delay: Duration,
    start_delay: Duration,
    revealed: usize,
    started: bool,
    completed: bool,
}

impl RevealText {
    /// Default per-character delay for revealed headings.
    pub const DEFAULT_CHAR_DELAY: Duration = Duration::from_millis(30);

    pub fn new(target: impl Into<String>, char_delay: Duration) -> Self {
        Self {
            target: target.into(),
            char_delay,
            start_delay: Duration::ZERO,
            revealed: 0,
            started: false,
            completed: false,
        }
    }

    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Currently visible prefix of the target.
    pub fn text(&self) -> &str {
        match self.target.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.target[..end],
            None => &self.target,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// True between the start delay and completion (cursor visible).
    pub fn is_typing(&self) -> bool {
        self.started && !self.completed
    }

    /// Delay before the next call to [`step`](Self::step), `None` once done.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.completed {
            None
        } else if !self.started {
            Some(self.start_delay)
        } else {
            Some(self.char_delay)
        }
    }

    pub fn step(&mut self) -> RevealProgress {
        if self.completed {
            return RevealProgress::Finished;
        }
        if !self.started {
            self.started = true;
            return RevealProgress::Waiting;
        }
        if self.revealed < self.target.chars().count() {
            self.revealed += 1;
        }
        if self.revealed == self.target.chars().count() {
            self.completed = true;
            RevealProgress::Completed
        } else {
            RevealProgress::Revealing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> TypewriterTiming {
        TypewriterTiming::from_millis(10, 5, 100)
    }

    #[test]
    fn rejects_empty_word_list() {
        let words: Vec<String> = Vec::new();
        assert!(matches!(
            CyclingTypewriter::new(words, fast()),
            Err(SiteError::EmptyWordList)
        ));
    }

    #[test]
    fn rejects_words_without_text() {
        assert!(matches!(
            CyclingTypewriter::new([""], fast()),
            Err(SiteError::EmptyWordList)
        ));
        assert!(matches!(
            CyclingTypewriter::new(["", ""], fast()),
            Err(SiteError::EmptyWordList)
        ));
    }

    #[test]
    fn types_pauses_deletes_and_advances() {
        let mut tw = CyclingTypewriter::new(["ab", "c"], fast()).unwrap();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.next_delay(), Duration::from_millis(10));

        tw.step();
        assert_eq!(tw.text(), "a");
        tw.step();
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.phase(), TypewriterPhase::Pausing);
        assert_eq!(tw.next_delay(), Duration::from_millis(100));

        tw.step();
        assert!(tw.is_deleting());
        assert_eq!(tw.next_delay(), Duration::from_millis(5));
        tw.step();
        assert_eq!(tw.text(), "a");
        tw.step();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.word_index(), 1);
        assert_eq!(tw.phase(), TypewriterPhase::Typing);

        tw.step();
        assert_eq!(tw.text(), "c");
        tw.step(); // pause ends
        tw.step(); // delete
        assert_eq!(tw.word_index(), 0, "wraps back to the first word");
    }

    #[test]
    fn multibyte_words_are_typed_by_character() {
        let mut tw = CyclingTypewriter::new(["मेधा"], fast()).unwrap();
        let mut seen = Vec::new();
        while tw.phase() == TypewriterPhase::Typing {
            tw.step();
            seen.push(tw.text().to_string());
        }
        assert_eq!(seen.last().map(String::as_str), Some("मेधा"));
        assert_eq!(seen.len(), "मेधा".chars().count());
    }

    #[test]
    fn empty_word_still_advances() {
        let mut tw = CyclingTypewriter::new(["", "x"], fast()).unwrap();
        tw.step();
        assert_eq!(tw.phase(), TypewriterPhase::Pausing);
        tw.step();
        assert_eq!(tw.word_index(), 1);
    }

    #[test]
    fn reveal_completes_exactly_once() {
        let mut reveal = RevealText::new("hey", Duration::from_millis(30))
            .with_start_delay(Duration::from_millis(500));
        assert_eq!(reveal.next_delay(), Some(Duration::from_millis(500)));
        assert_eq!(reveal.step(), RevealProgress::Waiting);
        assert!(reveal.is_typing());
        assert_eq!(reveal.next_delay(), Some(Duration::from_millis(30)));

        assert_eq!(reveal.step(), RevealProgress::Revealing);
        assert_eq!(reveal.text(), "h");
        assert_eq!(reveal.step(), RevealProgress::Revealing);
        assert_eq!(reveal.step(), RevealProgress::Completed);
        assert_eq!(reveal.text(), "hey");
        assert_eq!(reveal.step(), RevealProgress::Finished);
        assert_eq!(reveal.next_delay(), None);
        assert!(!reveal.is_typing());
    }

    #[test]
    fn reveal_of_empty_text_completes_on_first_tick() {
        let mut reveal = RevealText::new("", RevealText::DEFAULT_CHAR_DELAY);
        assert_eq!(reveal.step(), RevealProgress::Waiting);
        assert_eq!(reveal.step(), RevealProgress::Completed);
        assert_eq!(reveal.text(), "");
    }
}
