//! Core types for typewriter configuration

use std::time::Duration;

/// Where the typewriter currently is in its type / erase cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Adding one character per step
    #[default]
    Typing,
    /// Removing one character per step
    Deleting,
    /// Phrase fully typed, dwelling before deletion starts
    PausedAfterType,
    /// Phrase fully deleted, dwelling before the next phrase is typed
    PausedAfterDelete,
    /// Terminal; nothing is scheduled any more
    Stopped,
}

impl Mode {
    /// Check if this is one of the two dwell points of the cycle
    pub fn is_dwell(&self) -> bool {
        matches!(self, Self::PausedAfterType | Self::PausedAfterDelete)
    }
}

/// Timing and playback options for a [`crate::Typewriter`]
#[derive(Debug, Clone, PartialEq)]
pub struct TypewriterConfig {
    /// Base delay per typed character
    pub type_speed: Duration,
    /// Upper bound of the random extra delay added to every typed character
    pub jitter: Duration,
    /// Delay per deleted character
    pub delete_speed: Duration,
    /// Dwell after a phrase is fully typed (half of it after a phrase is deleted)
    pub pause_time: Duration,
    /// Keep cycling after the last phrase
    pub looping: bool,
    /// Cursor glyph shown by hosts next to the text
    pub cursor: char,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(100),
            jitter: Duration::from_millis(50),
            delete_speed: Duration::from_millis(50),
            pause_time: Duration::from_millis(2000),
            looping: true,
            cursor: '|',
        }
    }
}

impl TypewriterConfig {
    pub fn with_type_speed(mut self, speed: Duration) -> Self {
        self.type_speed = speed;
        self
    }

    pub fn with_jitter(mut self, jitter: Duration) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_delete_speed(mut self, speed: Duration) -> Self {
        self.delete_speed = speed;
        self
    }

    pub fn with_pause_time(mut self, pause: Duration) -> Self {
        self.pause_time = pause;
        self
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_cursor(mut self, cursor: char) -> Self {
        self.cursor = cursor;
        self
    }

    /// Dwell between a fully deleted phrase and the next one
    pub fn pause_after_delete(&self) -> Duration {
        self.pause_time / 2
    }
}

/// Options for a [`crate::TextReveal`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Delay per appended character
    pub speed: Duration,
    /// Delay before the first character appears
    pub delay: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            speed: Duration::from_millis(50),
            delay: Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TypewriterConfig::default();
        assert_eq!(config.type_speed, Duration::from_millis(100));
        assert_eq!(config.delete_speed, Duration::from_millis(50));
        assert_eq!(config.pause_time, Duration::from_millis(2000));
        assert!(config.looping);
        assert_eq!(config.cursor, '|');
    }

    #[test]
    fn test_pause_after_delete_is_half() {
        let config = TypewriterConfig::default().with_pause_time(Duration::from_millis(101));
        assert_eq!(config.pause_after_delete(), Duration::from_micros(50_500));
    }
}
