//! Dark/light theme preference.
//!
//! The saved preference wins; without one the system preference decides.
//! Preferences live in `<config dir>/folio/preferences.json`, or under
//! `FOLIO_CONFIG_DIR` when set.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn resolve(saved: Option<Theme>, system_prefers_dark: bool) -> Theme {
        match saved {
            Some(theme) => theme,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon offered by the toggle button: the theme you would switch to
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

/// Message posted to embedded project frames when the theme changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeMessage {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub theme: Theme,
}

impl ThemeMessage {
    pub fn update(theme: Theme) -> Self {
        Self {
            kind: "update-theme",
            theme,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    theme: Option<Theme>,
}

/// Persisted theme preference
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store in the user's config directory
    pub fn default_location() -> Result<Self> {
        let dir = match std::env::var_os("FOLIO_CONFIG_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => directories::ProjectDirs::from("", "", "folio")
                .context("Failed to determine config directory")?
                .config_dir()
                .to_path_buf(),
        };
        Ok(Self::new(dir.join("preferences.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved theme, if any. A missing or unreadable file counts as no preference.
    pub fn load(&self) -> Option<Theme> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Preferences>(&contents) {
            Ok(prefs) => prefs.theme,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "ignoring malformed preferences");
                None
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let prefs = Preferences { theme: Some(theme) };
        let json = serde_json::to_string_pretty(&prefs)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        debug!(%theme, path = %self.path.display(), "saved theme");
        Ok(())
    }
}

/// Best-effort system preference, read from `FOLIO_SYSTEM_THEME` or `COLORFGBG`.
pub fn system_prefers_dark() -> bool {
    if let Ok(value) = std::env::var("FOLIO_SYSTEM_THEME") {
        return value.eq_ignore_ascii_case("dark");
    }
    // COLORFGBG is "fg;bg"; backgrounds 0-6 and 8 are dark
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
        .is_some_and(|bg| bg < 7 || bg == 8)
}
