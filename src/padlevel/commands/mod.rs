//! # Command Layer
//!
//! Each command takes plain Rust values and returns a [`CmdResult`]. Nothing
//! here writes to stdout/stderr; the CLI decides how results are shown.

use crate::config::PadlevelConfig;
use crate::error::Result;
use crate::padding::{Padder, Padding, RenderMode};

pub mod config;
pub mod render;
pub mod table;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of the level table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRow {
    pub level: usize,
    pub width: usize,
    /// Sum of widths from level 1 through this one
    pub cumulative: usize,
    pub active: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub rendering: Option<String>,
    pub rows: Vec<LevelRow>,
    pub config: Option<PadlevelConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_rendering(mut self, rendering: impl Into<String>) -> Self {
        self.rendering = Some(rendering.into());
        self
    }

    pub fn with_rows(mut self, rows: Vec<LevelRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_config(mut self, config: PadlevelConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Per-invocation adjustments applied on top of the loaded config.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub unit: Option<String>,
    pub mode: Option<RenderMode>,
    /// Appended after the configured widths
    pub widths: Vec<usize>,
    /// `(level, width)` pairs applied with [`Padder::set`] after appending
    pub sets: Vec<(i64, usize)>,
    pub level: Option<i64>,
    pub up: usize,
    pub down: usize,
}

/// Builds a padder from `config` and applies `opts` in order: unit, mode,
/// widths, sets, level selection, then up/down steps.
pub fn build_padding(
    config: &PadlevelConfig,
    opts: &BuildOptions,
    result: &mut CmdResult,
) -> Result<Padding> {
    let mut pad = config.build()?;

    if let Some(unit) = &opts.unit {
        pad.set_unit(unit);
    }
    if let Some(mode) = opts.mode {
        pad.set_mode(mode);
    }
    for &width in &opts.widths {
        pad.add(width)?;
    }
    for &(level, width) in &opts.sets {
        pad.set(level, width)?;
    }

    if let Some(level) = opts.level {
        let before = pad.active_level();
        let in_range = usize::try_from(level).is_ok_and(|l| l > 0 && l <= pad.max());
        pad.pad_level(level);
        if !in_range {
            result.add_message(CmdMessage::warning(format!(
                "Level {} is outside 1..={}; keeping level {}",
                level,
                pad.max(),
                before
            )));
        }
    }

    for _ in 0..opts.up {
        pad.up();
    }
    for _ in 0..opts.down {
        pad.down();
    }

    Ok(pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_applies_options_in_order() {
        let config = PadlevelConfig {
            widths: vec![1],
            ..Default::default()
        };
        let opts = BuildOptions {
            unit: Some("#".to_string()),
            widths: vec![2, 3],
            sets: vec![(1, 5)],
            ..Default::default()
        };
        let mut result = CmdResult::default();
        let pad = build_padding(&config, &opts, &mut result).unwrap();

        assert_eq!(pad.widths(), vec![5, 2, 3]);
        assert_eq!(pad.as_str(), "#".repeat(10));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_build_warns_on_out_of_range_level() {
        let opts = BuildOptions {
            widths: vec![1, 1],
            level: Some(7),
            ..Default::default()
        };
        let mut result = CmdResult::default();
        let pad = build_padding(&PadlevelConfig::default(), &opts, &mut result).unwrap();

        assert_eq!(pad.active_level(), 2);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn test_build_propagates_padding_errors() {
        let opts = BuildOptions {
            sets: vec![(-3, 1)],
            ..Default::default()
        };
        let mut result = CmdResult::default();
        assert!(build_padding(&PadlevelConfig::default(), &opts, &mut result).is_err());
    }
}
