//! Configuration loading and defaults.
//!
//! A config file is optional: when `--config` is not given, the loader
//! looks for `.deadstrip.toml` next to the target file and falls back to
//! the built-in defaults. CLI flags override file values.

use crate::error::{Result, StripError};
use serde::Deserialize;
use std::path::Path;

/// Marker annotation matched when no override is configured.
pub const DEFAULT_MARKER: &str = "#[allow(dead_code)]";

/// File name probed next to the target when no config path is given.
pub const CONFIG_FILE_NAME: &str = ".deadstrip.toml";

/// Tool configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Substring that flags the following function as dead.
    pub marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| StripError::config(path, e.to_string()))?;
        toml::from_str(&content).map_err(|e| StripError::config(path, e.to_string()))
    }

    /// Load from the default location beside `target`, or fall back to
    /// the built-in defaults when no config file exists there.
    pub fn from_default_locations(target: &Path) -> Result<Self> {
        let dir = target.parent().filter(|p| !p.as_os_str().is_empty());
        let candidate = dir.unwrap_or_else(|| Path::new(".")).join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::from_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
