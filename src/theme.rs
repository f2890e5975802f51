//! Persisted light / dark theme preference

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key the preference is stored under
pub const THEME_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Label for the toggle control, which offers the other theme
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Dark => "Switch to light theme",
            Self::Light => "Switch to dark theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    #[serde(rename = "portfolio-theme")]
    theme: Theme,
}

/// Single-key TOML file holding the theme preference
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored theme, `None` when nothing was saved yet
    pub fn try_load(&self) -> Result<Option<Theme>, ThemeError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let file: ThemeFile = toml::from_str(&content)?;
        Ok(Some(file.theme))
    }

    /// Stored theme, or dark when missing or unreadable
    pub fn load(&self) -> Theme {
        match self.try_load() {
            Ok(theme) => theme.unwrap_or_default(),
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable {} in {}: {}",
                    THEME_KEY,
                    self.path.display(),
                    e
                );
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        let content = toml::to_string(&ThemeFile { theme })?;
        std::fs::write(&self.path, content)?;
        log::info!("Saved {} = {}", THEME_KEY, theme);
        Ok(())
    }

    /// Flip the stored theme and persist it
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        let theme = self.load().toggled();
        self.save(theme)?;
        Ok(theme)
    }
}
