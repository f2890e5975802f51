//! Typing / erasing phrase cycler

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::target::{char_prefix, DisplayTarget};
use crate::timeline::Timeline;
use crate::types::{Mode, TypewriterConfig};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("no display target was supplied")]
    MissingTarget,
    #[error("phrase list is empty")]
    EmptyPhraseList,
}

/// Types a phrase one character at a time, erases it, and moves on to the
/// next phrase, wrapping around at the end of the list.
///
/// The engine does not own a timer. The host calls [`Typewriter::advance`]
/// with the time that passed and may sleep for
/// [`Typewriter::time_until_next_step`] in between. Exactly one step is
/// pending while playback is active; every step schedules the next one.
#[derive(Debug)]
pub struct Typewriter<T: DisplayTarget> {
    target: Option<T>,
    phrases: Vec<String>,
    config: TypewriterConfig,
    phrase_index: usize,
    /// Characters (not bytes) of the current phrase on screen
    char_index: usize,
    mode: Mode,
    paused: bool,
    /// Passes through the whole phrase list since the last (re)start
    cycles_completed: u32,
    timeline: Timeline,
    rng: StdRng,
}

impl<T: DisplayTarget> Typewriter<T> {
    /// Create a typewriter, or report why it could not be created
    pub fn try_new<S: Into<String>>(
        target: Option<T>,
        phrases: impl IntoIterator<Item = S>,
        config: TypewriterConfig,
    ) -> Result<Self, TypewriterError> {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if target.is_none() {
            return Err(TypewriterError::MissingTarget);
        }
        if phrases.is_empty() {
            return Err(TypewriterError::EmptyPhraseList);
        }
        Ok(Self::build(target, phrases, config))
    }

    /// Create a typewriter.
    ///
    /// A missing target or an empty phrase list yields an inert engine that
    /// ignores every call instead of failing.
    pub fn new<S: Into<String>>(
        target: Option<T>,
        phrases: impl IntoIterator<Item = S>,
        config: TypewriterConfig,
    ) -> Self {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if target.is_none() {
            log::warn!("Typewriter: {}, staying inert", TypewriterError::MissingTarget);
        } else if phrases.is_empty() {
            log::warn!("Typewriter: {}, staying inert", TypewriterError::EmptyPhraseList);
        }
        Self::build(target, phrases, config)
    }

    fn build(target: Option<T>, phrases: Vec<String>, config: TypewriterConfig) -> Self {
        Self {
            target,
            phrases,
            config,
            phrase_index: 0,
            char_index: 0,
            mode: Mode::Typing,
            paused: false,
            cycles_completed: 0,
            timeline: Timeline::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed seed for the typing jitter
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // -- Playback control --

    /// Begin typing the first phrase.
    ///
    /// Calling it again while running throws away the pending step and
    /// starts over, so two step chains never coexist.
    pub fn start(&mut self) {
        if self.is_inert() {
            log::debug!("Typewriter: start ignored, engine is inert");
            return;
        }
        log::info!("Typewriter: starting with {} phrase(s)", self.phrases.len());
        self.rewind();
        self.step();
    }

    /// Halt at the next step boundary. A step already scheduled is not
    /// cancelled; when it comes due it does nothing and the chain ends.
    pub fn pause(&mut self) {
        if self.is_inert() {
            return;
        }
        self.paused = true;
    }

    /// Continue from where playback was paused
    pub fn resume(&mut self) {
        if self.is_inert() || !self.paused {
            return;
        }
        self.paused = false;
        // The in-flight step, if any, still drives the chain.
        if !self.timeline.is_scheduled() {
            self.step();
        }
    }

    /// Stop once the current cycle completes.
    ///
    /// Only clears the loop flag: the remaining phrases are typed and
    /// erased, and playback ends after the last one wraps back to index 0.
    pub fn stop(&mut self) {
        self.config.looping = false;
    }

    /// Stop now. The pending step is cancelled and the text stays as it is.
    pub fn stop_immediately(&mut self) {
        self.timeline.cancel();
        self.mode = Mode::Stopped;
    }

    /// Clear the text and start over from the first phrase with looping on
    pub fn restart(&mut self) {
        if self.is_inert() {
            return;
        }
        log::debug!("Typewriter: restart");
        self.config.looping = true;
        self.rewind();
        if let Some(target) = self.target.as_mut() {
            target.set_text("");
        }
        self.step();
    }

    /// Run every step that comes due within `elapsed`, in order
    pub fn advance(&mut self, elapsed: Duration) {
        let deadline = self.timeline.deadline_after(elapsed);
        while self.timeline.pop_due(deadline) {
            self.step();
        }
        self.timeline.settle(deadline);
    }

    /// Delay until the pending step, or `None` when nothing is scheduled
    pub fn time_until_next_step(&self) -> Option<Duration> {
        self.timeline.time_until_next()
    }

    // -- State --

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Times the last phrase was fully erased since the last (re)start
    pub fn cycles_completed(&self) -> u32 {
        self.cycles_completed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_looping(&self) -> bool {
        self.config.looping
    }

    pub fn is_stopped(&self) -> bool {
        self.mode == Mode::Stopped
    }

    /// Check if a step is pending
    pub fn is_scheduled(&self) -> bool {
        self.timeline.is_scheduled()
    }

    /// Check if the engine was built without a target or without phrases
    pub fn is_inert(&self) -> bool {
        self.target.is_none() || self.phrases.is_empty()
    }

    /// Text the engine last rendered, derived from its own indices
    pub fn visible_text(&self) -> &str {
        match self.phrases.get(self.phrase_index) {
            Some(phrase) => char_prefix(phrase, self.char_index),
            None => "",
        }
    }

    pub fn cursor(&self) -> char {
        self.config.cursor
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn into_target(self) -> Option<T> {
        self.target
    }

    // -- Internals --

    fn rewind(&mut self) {
        self.timeline.cancel();
        self.phrase_index = 0;
        self.char_index = 0;
        self.mode = Mode::Typing;
        self.paused = false;
        self.cycles_completed = 0;
    }

    fn step(&mut self) {
        if self.paused {
            log::debug!("Typewriter: paused in {:?}, chain halted", self.mode);
            return;
        }
        loop {
            match self.mode {
                Mode::Stopped => return,
                Mode::PausedAfterType => self.mode = Mode::Deleting,
                Mode::PausedAfterDelete => self.mode = Mode::Typing,
                Mode::Typing => return self.type_char(),
                Mode::Deleting => return self.delete_char(),
            }
        }
    }

    fn type_char(&mut self) {
        let len = self.current_len();
        self.char_index = (self.char_index + 1).min(len);
        self.render();

        if self.char_index == len {
            log::debug!("Typewriter: phrase {} typed", self.phrase_index);
            self.mode = Mode::PausedAfterType;
            self.timeline.schedule(self.config.pause_time);
        } else {
            let delay = self.type_delay();
            self.timeline.schedule(delay);
        }
    }

    fn delete_char(&mut self) {
        self.char_index = self.char_index.saturating_sub(1);
        self.render();

        if self.char_index > 0 {
            self.timeline.schedule(self.config.delete_speed);
            return;
        }

        self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        if self.phrase_index == 0 {
            self.cycles_completed = self.cycles_completed.saturating_add(1);
        }
        if self.phrase_index == 0 && !self.config.looping {
            log::info!("Typewriter: cycle complete, stopped");
            self.mode = Mode::Stopped;
            return;
        }
        log::debug!("Typewriter: next phrase {}", self.phrase_index);
        self.mode = Mode::PausedAfterDelete;
        self.timeline.schedule(self.config.pause_after_delete());
    }

    fn render(&mut self) {
        if let Some(target) = self.target.as_mut() {
            let phrase = &self.phrases[self.phrase_index];
            target.set_text(char_prefix(phrase, self.char_index));
        }
    }

    fn current_len(&self) -> usize {
        self.phrases[self.phrase_index].chars().count()
    }

    /// Base type speed plus a fresh random share of the jitter
    fn type_delay(&mut self) -> Duration {
        let jitter = u64::try_from(self.config.jitter.as_nanos()).unwrap_or(u64::MAX);
        if jitter == 0 {
            return self.config.type_speed;
        }
        self.config
            .type_speed
            .saturating_add(Duration::from_nanos(self.rng.gen_range(0..jitter)))
    }
}
