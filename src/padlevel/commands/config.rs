use crate::commands::{CmdMessage, CmdResult};
use crate::config::PadlevelConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PadlevelConfig::load(dir)?;

    let message = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => config
            .get(&key)
            .map(CmdMessage::info)
            .unwrap_or_else(|| CmdMessage::error(format!("Unknown config key: {}", key))),
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(()) => {
                config.save(dir)?;
                tracing::debug!(%key, %value, "saved config");
                let shown = config.get(&key).unwrap_or(value);
                CmdMessage::success(format!("{} set to {}", key, shown))
            }
            Err(e) => CmdMessage::error(e),
        },
    };

    let mut outcome = CmdResult::default();
    outcome.add_message(message);
    Ok(outcome)
}
