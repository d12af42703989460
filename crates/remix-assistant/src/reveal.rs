//! Character-by-character reveal of assistant replies.
//!
//! The whole reply is known up front; the typewriter only paces how much of
//! it is visible. Prefixes always end on a char boundary.

use std::ops::ControlFlow;

use crate::pacing::DelayProvider;

/// Progressive view over one message's content.
#[derive(Debug, Clone)]
pub struct Typewriter<'a> {
    content: &'a str,
    /// Byte offset after each char, so `ends[n - 1]` is the end of `n` chars.
    ends: Vec<usize>,
}

impl<'a> Typewriter<'a> {
    pub fn new(content: &'a str) -> Self {
        let ends = content
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        Self { content, ends }
    }

    /// Number of reveal steps.
    pub fn total_chars(&self) -> usize {
        self.ends.len()
    }

    /// The first `visible` chars (clamped to the content length).
    pub fn prefix(&self, visible: usize) -> &'a str {
        match visible.min(self.ends.len()) {
            0 => "",
            n => &self.content[..self.ends[n - 1]],
        }
    }

    /// Reveal one char per `delay.reveal_interval()`, calling `on_frame` with
    /// the visible char count and prefix after each step.
    ///
    /// Returns `true` if every char was revealed, `false` if `on_frame`
    /// stopped the reveal early.
    pub async fn run<D, F>(&self, delay: &D, mut on_frame: F) -> bool
    where
        D: DelayProvider,
        F: FnMut(usize, &str) -> ControlFlow<()>,
    {
        for visible in 1..=self.total_chars() {
            delay.sleep(delay.reveal_interval()).await;
            if on_frame(visible, self.prefix(visible)).is_break() {
                return false;
            }
        }
        true
    }
}
