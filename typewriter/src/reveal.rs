//! One-shot left-to-right text reveal

use std::time::Duration;

use crate::target::DisplayTarget;
use crate::timeline::Timeline;
use crate::types::RevealConfig;

/// Clears its target, waits for the configured delay, then appends the
/// text one character per tick until all of it is shown.
#[derive(Debug)]
pub struct TextReveal<T: DisplayTarget> {
    target: T,
    chars: Vec<char>,
    revealed: usize,
    config: RevealConfig,
    timeline: Timeline,
}

impl<T: DisplayTarget> TextReveal<T> {
    pub fn new(mut target: T, text: impl Into<String>, config: RevealConfig) -> Self {
        let chars: Vec<char> = text.into().chars().collect();
        target.set_text("");

        let mut timeline = Timeline::default();
        if !chars.is_empty() {
            // First character lands one tick after the delay
            timeline.schedule(config.delay.saturating_add(config.speed));
        }

        Self {
            target,
            chars,
            revealed: 0,
            config,
            timeline,
        }
    }

    /// Append every character that comes due within `elapsed`
    pub fn advance(&mut self, elapsed: Duration) {
        let deadline = self.timeline.deadline_after(elapsed);
        while self.timeline.pop_due(deadline) {
            self.target.append_char(self.chars[self.revealed]);
            self.revealed += 1;
            if !self.is_complete() {
                self.timeline.schedule(self.config.speed);
            }
        }
        self.timeline.settle(deadline);
    }

    /// Show the whole text now
    pub fn skip(&mut self) {
        if self.is_complete() {
            return;
        }
        self.timeline.cancel();
        self.revealed = self.chars.len();
        let text: String = self.chars.iter().collect();
        self.target.set_text(&text);
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.chars.len()
    }

    pub fn time_until_next_step(&self) -> Option<Duration> {
        self.timeline.time_until_next()
    }

    /// Number of characters shown so far
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}
