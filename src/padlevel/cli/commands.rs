use super::print::{print_config, print_messages, print_rendering, print_table};
use super::setup::{BuildArgs, Cli, Commands};
use clap::Parser;
use padlevel::commands::{self, config::ConfigAction};
use padlevel::config::{resolve_config_dir, PadlevelConfig};
use padlevel::error::Result;
use padlevel::logging::init_tracing;
use std::path::Path;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    tracing::debug!(dir = %config_dir.display(), "using config dir");

    match cli.command {
        Some(Commands::Render { build, delimit }) => handle_render(&config_dir, build, delimit),
        Some(Commands::Table { build }) => handle_table(&config_dir, build),
        Some(Commands::Config { key, value }) => handle_config(&config_dir, key, value),
        None => handle_render(&config_dir, BuildArgs::default(), false),
    }
}

fn handle_render(config_dir: &Path, build: BuildArgs, delimit: bool) -> Result<()> {
    let config = PadlevelConfig::load(config_dir)?;
    let result = commands::render::run(&config, &build.into())?;
    print_messages(&result.messages);
    if let Some(rendering) = &result.rendering {
        print_rendering(rendering, delimit);
    }
    Ok(())
}

fn handle_table(config_dir: &Path, build: BuildArgs) -> Result<()> {
    let config = PadlevelConfig::load(config_dir)?;
    let result = commands::table::run(&config, &build.into())?;
    print_table(&result.rows);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = commands::config::run(config_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
