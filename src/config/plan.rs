use super::AppMode;
use super::cli::{Cli, FileConfig};
use super::parse::parse_cli_date;
use anyhow::{Result, anyhow};

pub(crate) fn build_plan_mode(cli: &Cli, file_config: &FileConfig) -> Result<AppMode> {
    let start = cli
        .start_date
        .as_deref()
        .or(file_config.start_date.as_deref())
        .ok_or_else(|| anyhow!("missing --start-date"))?;
    let start = parse_cli_date("start-date", start)?;
    // A one-day tournament needs no end date.
    let end = match cli
        .end_date
        .as_deref()
        .or(file_config.end_date.as_deref())
    {
        Some(end) => parse_cli_date("end-date", end)?,
        None => start,
    };
    Ok(AppMode::Plan {
        start,
        end,
        output_json: cli
            .output_json
            .clone()
            .or_else(|| file_config.output_json.clone()),
    })
}
