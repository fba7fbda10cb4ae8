use crate::commands::{build_padding, BuildOptions, CmdResult};
use crate::config::PadlevelConfig;
use crate::error::Result;

pub fn run(config: &PadlevelConfig, opts: &BuildOptions) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let pad = build_padding(config, opts, &mut result)?;
    Ok(result.with_rendering(pad.as_str()))
}
