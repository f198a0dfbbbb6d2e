//! Sheet configuration
//!
//! A sheet run is described by one TOML file naming the icon directory, the
//! output location, and the conversion parameters. Relative paths resolve
//! against the config file's directory, so a config can live next to the
//! icons it describes and be invoked from anywhere.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::appearance::AppearanceMode;

/// Errors that can occur when loading or validating a sheet config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for one icon-sheet generation run
#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    /// Directory scanned for `.svg` files
    pub icons_dir: PathBuf,

    /// Directory the generated sheet is written into
    pub dist_dir: PathBuf,

    /// Icon set name written into the sheet envelope
    pub set_name: String,

    /// File name of the generated sheet inside `dist_dir`
    pub icons_file_name: String,

    /// Edge length of the canonical output viewport
    #[serde(default = "default_icon_size")]
    pub icon_size: f64,

    /// Visual margin in original coordinate units
    #[serde(default)]
    pub padding: f64,

    /// Appearance requested for the whole set
    #[serde(default)]
    pub appearance: AppearanceMode,

    /// Per-icon appearance overrides, icon name to mode
    #[serde(default)]
    pub appearance_override: HashMap<String, AppearanceMode>,
}

fn default_icon_size() -> f64 {
    24.0
}

impl SheetConfig {
    /// Load a config from a TOML file, resolving relative paths against the
    /// file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_str(&content)?;
        if let Some(dir) = path.parent() {
            config.icons_dir = dir.join(&config.icons_dir);
            config.dist_dir = dir.join(&config.dist_dir);
        }
        Ok(config)
    }

    /// Load a config from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SheetConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The appearance mode for a specific icon, honoring overrides.
    pub fn appearance_for(&self, icon: &str) -> AppearanceMode {
        self.appearance_override
            .get(icon)
            .copied()
            .unwrap_or(self.appearance)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "padding must be a finite number >= 0, got {}",
                self.padding
            )));
        }
        if !self.icon_size.is_finite() || self.icon_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "icon_size must be a finite number > 0, got {}",
                self.icon_size
            )));
        }
        Ok(())
    }
}
