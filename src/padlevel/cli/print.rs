use colored::Colorize;
use padlevel::commands::{CmdMessage, LevelRow, MessageLevel};
use padlevel::config::{PadlevelConfig, CONFIG_KEYS};

const ACTIVE_MARKER: &str = "▸";

/// Info and success go to stdout; warnings and errors go to stderr so the
/// rendering stays clean when piped.
pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_rendering(rendering: &str, delimit: bool) {
    if delimit {
        println!("|{}|", rendering);
    } else {
        println!("{}", rendering);
    }
}

pub(super) fn print_table(rows: &[LevelRow]) {
    if rows.is_empty() {
        println!("No levels.");
        return;
    }

    println!("  {:>5}  {:>5}  {:>5}", "level", "width", "total");
    for row in rows {
        let marker = if row.active {
            ACTIVE_MARKER.yellow()
        } else {
            " ".normal()
        };
        println!(
            "{} {:>5}  {:>5}  {:>5}",
            marker, row.level, row.width, row.cumulative
        );
    }
}

pub(super) fn print_config(config: &PadlevelConfig) {
    for key in CONFIG_KEYS {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {:?}", key.bold(), value);
    }
}
