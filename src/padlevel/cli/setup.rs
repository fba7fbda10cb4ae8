use clap::{Args, Parser, Subcommand};
use padlevel::commands::BuildOptions;
use padlevel::padding::RenderMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "padlevel", bin_name = "padlevel", version)]
#[command(about = "Multi-level indentation padding", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (defaults to PADLEVEL_CONFIG_DIR, then the OS config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Flags shared by commands that build a padder.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Append a level with this width (repeatable)
    #[arg(short, long = "width", value_name = "WIDTH")]
    pub widths: Vec<usize>,

    /// Update a level after appending, e.g. 1=20 (repeatable)
    #[arg(
        short,
        long = "set",
        value_name = "LEVEL=WIDTH",
        value_parser = parse_level_width,
        allow_hyphen_values = true
    )]
    pub sets: Vec<(i64, usize)>,

    /// Repeating unit (overrides config)
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Select the active level
    #[arg(short, long, value_name = "LEVEL", allow_hyphen_values = true)]
    pub level: Option<i64>,

    /// Render mode: all | up-to-active
    #[arg(short, long)]
    pub mode: Option<RenderMode>,

    /// Move the active level up this many times
    #[arg(long, default_value_t = 0)]
    pub up: usize,

    /// Move the active level down this many times
    #[arg(long, default_value_t = 0)]
    pub down: usize,
}

impl From<BuildArgs> for BuildOptions {
    fn from(args: BuildArgs) -> Self {
        BuildOptions {
            unit: args.unit,
            mode: args.mode,
            widths: args.widths,
            sets: args.sets,
            level: args.level,
            up: args.up,
            down: args.down,
        }
    }
}

fn parse_level_width(s: &str) -> Result<(i64, usize), String> {
    let (level, width) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LEVEL=WIDTH, got '{}'", s))?;
    let level = level
        .trim()
        .parse()
        .map_err(|_| format!("invalid level '{}'", level))?;
    let width = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{}'", width))?;
    Ok((level, width))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the padding string
    #[command(alias = "r")]
    Render {
        #[command(flatten)]
        build: BuildArgs,

        /// Wrap the output in '|' markers so whitespace is visible
        #[arg(long)]
        delimit: bool,
    },

    /// Show the level table
    #[command(alias = "t")]
    Table {
        #[command(flatten)]
        build: BuildArgs,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (max-levels, unit, mode, widths)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
