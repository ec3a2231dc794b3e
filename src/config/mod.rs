//! Persisted tool preferences.
//!
//! The last-used save directory is remembered across sessions in
//! `~/.config/viewshot/config.toml`. If no file exists, defaults are used
//! automatically.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User preferences persisted between sessions.
#[derive(Debug, Serialize, Deserialize)]
pub struct Preferences {
    /// Folder screenshots were last saved to.
    #[serde(default = "default_save_path")]
    pub save_path: PathBuf,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            save_path: default_save_path(),
        }
    }
}

fn default_save_path() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Viewshot")
}

impl Preferences {
    /// Returns the path to the preferences file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("viewshot");

        Ok(config_dir.join("config.toml"))
    }

    /// Load preferences from disk, or defaults if the file is missing.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            info!("Preferences file not found, using defaults");
            debug!("Expected preferences at: {}", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read preferences from {}", path.display()))?;

        let prefs: Preferences = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse preferences from {}", path.display()))?;

        info!("Loaded preferences from {}", path.display());
        Ok(prefs)
    }

    /// Save preferences, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let raw = toml::to_string_pretty(self).context("Failed to serialize preferences")?;

        fs::write(&path, raw)
            .with_context(|| format!("Failed to write preferences to {}", path.display()))?;

        info!("Saved preferences to {}", path.display());
        Ok(())
    }

    /// Remember a newly chosen save directory, as the editor's folder
    /// browser does after a successful pick.
    pub fn remember_save_path(save_path: PathBuf) -> Result<()> {
        let mut prefs = Self::load().unwrap_or_default();
        prefs.save_path = save_path;
        prefs.save()
    }
}
