use crate::commands::{build_padding, BuildOptions, CmdMessage, CmdResult, LevelRow};
use crate::config::PadlevelConfig;
use crate::error::Result;

pub fn run(config: &PadlevelConfig, opts: &BuildOptions) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let pad = build_padding(config, opts, &mut result)?;

    let active = pad.active_level();
    let mut cumulative = 0;
    let rows = pad
        .levels()
        .map(|(level, width)| {
            cumulative += width;
            LevelRow {
                level,
                width,
                cumulative,
                active: level == active,
            }
        })
        .collect();

    result.add_message(CmdMessage::info(format!(
        "{} levels, active level {}, mode {}, {} columns",
        pad.size(),
        active,
        pad.mode(),
        pad.display_width()
    )));

    Ok(result.with_rows(rows).with_rendering(pad.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_accumulate() {
        let opts = BuildOptions {
            widths: vec![2, 3, 4],
            level: Some(2),
            ..Default::default()
        };
        let result = run(&PadlevelConfig::default(), &opts).unwrap();

        let cumulative: Vec<usize> = result.rows.iter().map(|r| r.cumulative).collect();
        assert_eq!(cumulative, vec![2, 5, 9]);

        let active: Vec<usize> = result
            .rows
            .iter()
            .filter(|r| r.active)
            .map(|r| r.level)
            .collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn test_table_summary_message() {
        let opts = BuildOptions {
            widths: vec![1],
            ..Default::default()
        };
        let result = run(&PadlevelConfig::default(), &opts).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("1 levels"));
        assert!(result.messages[0].content.contains("mode all"));
    }
}
