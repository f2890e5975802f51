//! Irregular cursor blinking

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::timeline::Timeline;

/// Cursor that occasionally blinks off for a moment.
///
/// Every `interval` a roll decides whether the cursor hides; a hidden
/// cursor comes back after `hide_for`.
#[derive(Debug)]
pub struct CursorBlink {
    interval: Duration,
    hide_for: Duration,
    probability: f64,
    visible: bool,
    timeline: Timeline,
    rng: StdRng,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorBlink {
    pub fn new() -> Self {
        let interval = Duration::from_secs(1);
        let mut timeline = Timeline::default();
        timeline.schedule(interval);
        Self {
            interval,
            hide_for: Duration::from_millis(150),
            probability: 0.3,
            visible: true,
            timeline,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Chance (0.0 to 1.0) that a tick hides the cursor
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability.clamp(0.0, 1.0);
        self
    }

    pub fn advance(&mut self, elapsed: Duration) {
        let deadline = self.timeline.deadline_after(elapsed);
        while self.timeline.pop_due(deadline) {
            if !self.visible {
                self.visible = true;
                // Back onto the regular tick grid
                self.timeline
                    .schedule(self.interval.saturating_sub(self.hide_for));
            } else if self.rng.gen_bool(self.probability) {
                self.visible = false;
                self.timeline.schedule(self.hide_for);
            } else {
                self.timeline.schedule(self.interval);
            }
        }
        self.timeline.settle(deadline);
    }

    pub fn time_until_next_step(&self) -> Option<Duration> {
        self.timeline.time_until_next()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Glyph to draw for the current phase
    pub fn glyph(&self, cursor: char) -> char {
        if self.visible {
            cursor
        } else {
            ' '
        }
    }
}
