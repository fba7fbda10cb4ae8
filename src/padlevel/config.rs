//! # Configuration
//!
//! Settings are stored as JSON in `config.json` inside a config directory. A
//! missing file yields the defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `max-levels` | `1` | Initial active level passed to [`Padding::new`] |
//! | `unit` | `" "` | Repeating unit |
//! | `mode` | `all` | `all` or `up-to-active` |
//! | `widths` | empty | Comma separated widths appended on build |

use crate::error::{PadlevelError, Result};
use crate::padding::{
    Padder, Padding, RenderMode, DEFAULT_PADDING_LEVEL, DEFAULT_PADDING_UNIT,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: &[&str] = &["max-levels", "unit", "mode", "widths"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PadlevelConfig {
    #[serde(default = "default_max_levels")]
    pub max_levels: i64,

    #[serde(default = "default_unit")]
    pub unit: String,

    #[serde(default)]
    pub mode: RenderMode,

    /// Widths appended, in order, when the padder is built
    #[serde(default)]
    pub widths: Vec<usize>,
}

fn default_max_levels() -> i64 {
    DEFAULT_PADDING_LEVEL
}

fn default_unit() -> String {
    DEFAULT_PADDING_UNIT.to_string()
}

impl Default for PadlevelConfig {
    fn default() -> Self {
        Self {
            max_levels: default_max_levels(),
            unit: default_unit(),
            mode: RenderMode::default(),
            widths: Vec::new(),
        }
    }
}

impl PadlevelConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PadlevelConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "max-levels" => Some(self.max_levels.to_string()),
            "unit" => Some(self.unit.clone()),
            "mode" => Some(self.mode.to_string()),
            "widths" => Some(
                self.widths
                    .iter()
                    .map(|w| w.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "max-levels" => {
                self.max_levels = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid max-levels: {}", value))?;
            }
            "unit" => self.unit = value.to_string(),
            "mode" => self.mode = value.parse()?,
            "widths" => self.widths = parse_widths(value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// Builds a padder from these settings, appending the configured widths.
    pub fn build(&self) -> Result<Padding> {
        let mut pad = Padding::new(self.max_levels, &self.unit).with_mode(self.mode);
        for &width in &self.widths {
            pad.add(width)?;
        }
        Ok(pad)
    }
}

fn parse_widths(value: &str) -> std::result::Result<Vec<usize>, String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().map_err(|_| format!("Invalid width: {}", s)))
        .collect()
}

/// Resolves a config directory from a CLI override, then `PADLEVEL_CONFIG_DIR`,
/// then the platform config dir.
pub fn resolve_config_dir(explicit: Option<&Path>) -> Result<std::path::PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Ok(dir) = std::env::var("PADLEVEL_CONFIG_DIR") {
        if !dir.is_empty() {
            return Ok(dir.into());
        }
    }
    directories::ProjectDirs::from("com", "padlevel", "padlevel")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PadlevelError::Config("Could not determine config dir".to_string()))
}
