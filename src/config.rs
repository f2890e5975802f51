//! Configuration loading from portfolio.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use typewriter::{RevealConfig, TypewriterConfig};

/// Root configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// File holding the persisted theme preference
    #[serde(default = "default_theme_file")]
    pub theme_file: PathBuf,
    /// Full phrase cycles to play before exiting (0 = forever)
    #[serde(default = "default_cycles")]
    pub cycles: u32,
    #[serde(default)]
    pub typewriter: TypewriterSection,
    #[serde(default)]
    pub reveal: RevealSection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_file: default_theme_file(),
            cycles: default_cycles(),
            typewriter: TypewriterSection::default(),
            reveal: RevealSection::default(),
        }
    }
}

fn default_theme_file() -> PathBuf {
    PathBuf::from(".portfolio-theme.toml")
}

fn default_cycles() -> u32 {
    2
}

/// Typewriter line configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TypewriterSection {
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,
    #[serde(default = "default_type_speed")]
    pub type_speed_ms: u64,
    #[serde(default = "default_jitter")]
    pub jitter_ms: u64,
    #[serde(default = "default_delete_speed")]
    pub delete_speed_ms: u64,
    #[serde(default = "default_pause_time")]
    pub pause_time_ms: u64,
    #[serde(default = "default_loop", rename = "loop")]
    pub looping: bool,
    #[serde(default = "default_cursor")]
    pub cursor: String,
}

impl Default for TypewriterSection {
    fn default() -> Self {
        Self {
            phrases: default_phrases(),
            type_speed_ms: default_type_speed(),
            jitter_ms: default_jitter(),
            delete_speed_ms: default_delete_speed(),
            pause_time_ms: default_pause_time(),
            looping: default_loop(),
            cursor: default_cursor(),
        }
    }
}

fn default_phrases() -> Vec<String> {
    [
        "AI/ML Engineer",
        "Full-Stack Developer",
        "Problem Solver",
        "Innovation Driver",
        "Tech Enthusiast",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
fn default_type_speed() -> u64 {
    80
}
fn default_jitter() -> u64 {
    50
}
fn default_delete_speed() -> u64 {
    40
}
fn default_pause_time() -> u64 {
    2000
}
fn default_loop() -> bool {
    true
}
fn default_cursor() -> String {
    "|".to_string()
}

impl TypewriterSection {
    pub fn to_typewriter_config(&self) -> TypewriterConfig {
        let cursor = match self.cursor.chars().next() {
            Some(c) => c,
            None => {
                log::warn!("Empty cursor glyph, defaulting to '|'");
                '|'
            }
        };

        TypewriterConfig::default()
            .with_type_speed(Duration::from_millis(self.type_speed_ms))
            .with_jitter(Duration::from_millis(self.jitter_ms))
            .with_delete_speed(Duration::from_millis(self.delete_speed_ms))
            .with_pause_time(Duration::from_millis(self.pause_time_ms))
            .with_loop(self.looping)
            .with_cursor(cursor)
    }
}

/// Heading revealed above the typewriter line
#[derive(Debug, Clone, Deserialize)]
pub struct RevealSection {
    #[serde(default = "default_heading")]
    pub text: String,
    #[serde(default = "default_reveal_speed")]
    pub speed_ms: u64,
    #[serde(default)]
    pub delay_ms: u64,
}

impl Default for RevealSection {
    fn default() -> Self {
        Self {
            text: default_heading(),
            speed_ms: default_reveal_speed(),
            delay_ms: 0,
        }
    }
}

fn default_heading() -> String {
    "Hi, I'm a".to_string()
}
fn default_reveal_speed() -> u64 {
    50
}

impl RevealSection {
    pub fn to_reveal_config(&self) -> RevealConfig {
        RevealConfig {
            speed: Duration::from_millis(self.speed_ms),
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.cycles, 2);
        assert_eq!(config.typewriter.phrases.len(), 5);
        assert_eq!(config.theme_file, PathBuf::from(".portfolio-theme.toml"));

        let tw = config.typewriter.to_typewriter_config();
        assert_eq!(tw.type_speed, Duration::from_millis(80));
        assert_eq!(tw.delete_speed, Duration::from_millis(40));
        assert!(tw.looping);
    }

    #[test]
    fn test_typewriter_section() {
        let config = Config::parse(
            r#"
            cycles = 0

            [typewriter]
            phrases = ["Hi", "Yo"]
            type_speed_ms = 10
            jitter_ms = 0
            delete_speed_ms = 5
            pause_time_ms = 100
            loop = false
            cursor = "_"
            "#,
        )
        .unwrap();

        assert_eq!(config.cycles, 0);
        assert_eq!(config.typewriter.phrases, vec!["Hi", "Yo"]);
        let tw = config.typewriter.to_typewriter_config();
        assert_eq!(tw.jitter, Duration::ZERO);
        assert_eq!(tw.pause_time, Duration::from_millis(100));
        assert!(!tw.looping);
        assert_eq!(tw.cursor, '_');
    }

    #[test]
    fn test_empty_cursor_falls_back() {
        let section = TypewriterSection {
            cursor: String::new(),
            ..Default::default()
        };
        assert_eq!(section.to_typewriter_config().cursor, '|');
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = Config::parse("cycles = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::load("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
