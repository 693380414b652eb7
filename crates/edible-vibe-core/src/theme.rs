//! Theme preference (light / dark)
//!
//! Persisted by the browser in `localStorage` under [`THEME_STORAGE_KEY`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const THEME_STORAGE_KEY: &str = "edible-vibe-theme";

/// Site color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark background (default, matches the hero video)
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Label for the toggle button (names the mode it switches *to*)
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Switch to light theme",
            ThemeMode::Light => "Switch to dark theme",
        }
    }
}

/// Persisted UI preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreferences {
    pub mode: ThemeMode,
}

impl ThemePreferences {
    /// Parse stored preferences. Returns defaults on any parse error.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }

    pub fn to_stored(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize theme preferences")
    }
}
