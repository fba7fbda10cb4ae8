//! # Padding Accumulator
//!
//! A [`Padding`] maps indentation levels to widths and renders them as a
//! repeated unit string. Levels are assigned sequentially starting at 1; the
//! rendering is computed lazily and cached until the next mutation.
//!
//! ## Rendering Modes
//!
//! By default the rendering sums the widths of **every** stored level, no
//! matter which level is active. [`RenderMode::UpToActive`] restricts the sum
//! to levels `<=` the active level, which gives per-depth indentation:
//!
//! ```
//! use padlevel::padding::{Padder, Padding, RenderMode};
//!
//! let mut pad = Padding::new(0, "*");
//! pad.add(3).unwrap();
//! pad.add(4).unwrap();
//! assert_eq!(pad.to_string(), "*******");
//!
//! let mut pad = pad.with_mode(RenderMode::UpToActive);
//! assert_eq!(pad.pad_level(1), "***");
//! ```
//!
//! ## Size vs. Next Level
//!
//! [`Padding::size`] is the number of stored levels and [`Padding::next_level`]
//! is the key the next append will use. With sequential assignment the two
//! differ by one; appending refuses to overwrite if they ever disagree.

use crate::error::{PadlevelError, Result};
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

/// Requested level counts above this are reset to 0.
pub const MAX_PADDING_LEVEL: i64 = 80;
/// Upper bound on the sum of all stored widths.
pub const MAX_PADDING_WIDTH: usize = 1 << 16;
pub const DEFAULT_PADDING_LEVEL: i64 = 1;
pub const DEFAULT_PADDING_UNIT: &str = " ";

/// Which stored levels contribute to the rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Sum the widths of all stored levels.
    #[default]
    All,
    /// Sum the widths of levels up to and including the active level.
    UpToActive,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::All => "all",
            RenderMode::UpToActive => "up-to-active",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(RenderMode::All),
            "up-to-active" | "active" => Ok(RenderMode::UpToActive),
            other => Err(format!(
                "Unknown render mode: {} (expected 'all' or 'up-to-active')",
                other
            )),
        }
    }
}

/// Indentation padder with numbered levels.
pub trait Padder: fmt::Display {
    /// Number of stored levels.
    fn max(&self) -> usize;

    /// Append a new level after the highest one.
    fn add(&mut self, width: usize) -> Result<()>;

    /// Update an existing level, or append when `level` is past the end.
    fn set(&mut self, level: i64, width: usize) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct Padding {
    level: usize,
    unit: String,
    mode: RenderMode,
    current: OnceCell<String>,
    levels: BTreeMap<usize, usize>,
}

impl Default for Padding {
    fn default() -> Self {
        Padding::new(0, DEFAULT_PADDING_UNIT)
    }
}

impl Padding {
    /// Creates a padder whose active level starts at `max_levels`.
    ///
    /// If `max_levels` is negative or greater than [`MAX_PADDING_LEVEL`], it is
    /// set to 0. If `unit` is empty, a single space is used.
    pub fn new(max_levels: i64, unit: &str) -> Self {
        let level = if (0..=MAX_PADDING_LEVEL).contains(&max_levels) {
            max_levels as usize
        } else {
            0
        };

        let unit = if unit.is_empty() {
            DEFAULT_PADDING_UNIT
        } else {
            unit
        };

        Self {
            level,
            unit: unit.to_string(),
            mode: RenderMode::default(),
            current: OnceCell::new(),
            levels: BTreeMap::new(),
        }
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.set_mode(mode);
        self
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
        self.invalidate();
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Replaces the repeating unit. Control characters are dropped; if nothing
    /// is left, the unit falls back to a single space.
    pub fn set_unit(&mut self, unit: &str) {
        let filtered: String = unit.chars().filter(|c| !c.is_control()).collect();
        self.unit = if filtered.is_empty() {
            DEFAULT_PADDING_UNIT.to_string()
        } else {
            filtered
        };
        self.invalidate();
    }

    pub fn active_level(&self) -> usize {
        self.level
    }

    pub fn size(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Key the next [`Padder::add`] will try to use.
    pub fn next_level(&self) -> usize {
        self.size() + 1
    }

    pub fn width_of(&self, level: usize) -> Option<usize> {
        self.levels.get(&level).copied()
    }

    /// `(level, width)` pairs in level order.
    pub fn levels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.levels.iter().map(|(&level, &width)| (level, width))
    }

    pub fn keys(&self) -> Vec<usize> {
        self.levels.keys().copied().collect()
    }

    pub fn widths(&self) -> Vec<usize> {
        self.levels.values().copied().collect()
    }

    /// Selects `level` as active when it is in `1..=size()`, then returns the
    /// rendering. Out-of-range levels leave the state untouched.
    pub fn pad_level(&mut self, level: i64) -> &str {
        if let Ok(level) = usize::try_from(level) {
            if level > 0 && level <= self.size() {
                self.level = level;
                self.invalidate();
            }
        }
        self.as_str()
    }

    pub fn up(&mut self) {
        if self.level < self.size() {
            self.level += 1;
            self.invalidate();
        }
    }

    pub fn down(&mut self) {
        if self.level > 0 {
            self.level -= 1;
            self.invalidate();
        }
    }

    /// The cached rendering, computed on first read after a mutation.
    pub fn as_str(&self) -> &str {
        self.current.get_or_init(|| self.render())
    }

    /// Terminal column width of the rendering.
    pub fn display_width(&self) -> usize {
        self.as_str().width()
    }

    fn render(&self) -> String {
        let count: usize = match self.mode {
            RenderMode::All => self.levels.values().sum(),
            RenderMode::UpToActive => self.levels.range(..=self.level).map(|(_, w)| w).sum(),
        };
        tracing::trace!(count, mode = %self.mode, "rendering padding");
        self.unit.repeat(count)
    }

    fn invalidate(&mut self) {
        self.current.take();
    }

    /// Fails unless storing `width` at `level`, in place of `replaced`, keeps
    /// the table total within [`MAX_PADDING_WIDTH`].
    fn check_width(&self, level: usize, replaced: usize, width: usize) -> Result<()> {
        let rest: usize = self.levels.values().sum::<usize>() - replaced;
        match rest.checked_add(width) {
            Some(total) if total <= MAX_PADDING_WIDTH => Ok(()),
            _ => Err(PadlevelError::InvalidWidth {
                level,
                width,
                limit: MAX_PADDING_WIDTH,
            }),
        }
    }
}

impl Padder for Padding {
    fn max(&self) -> usize {
        self.size()
    }

    fn add(&mut self, width: usize) -> Result<()> {
        let level = self.next_level();
        self.check_width(level, 0, width)?;

        match self.levels.entry(level) {
            Entry::Occupied(_) => return Err(PadlevelError::DuplicateLevel { level, width }),
            Entry::Vacant(slot) => {
                slot.insert(width);
            }
        }

        self.level = level;
        self.invalidate();
        tracing::debug!(level, width, "added padding level");
        Ok(())
    }

    fn set(&mut self, level: i64, width: usize) -> Result<()> {
        let Ok(level) = usize::try_from(level) else {
            return Err(PadlevelError::InvalidLevel(level));
        };

        if level > self.size() {
            return self.add(width);
        }

        let Some(&old) = self.levels.get(&level) else {
            return Err(PadlevelError::LevelNotFound(level));
        };
        self.check_width(level, old, width)?;
        self.levels.insert(level, width);

        self.invalidate();
        tracing::debug!(level, width, "updated padding level");
        Ok(())
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
