use super::AppMode;
use super::cli::{Cli, FileConfig};
use crate::model::{BaselineProfile, ConditionSet};
use anyhow::{Result, anyhow};

/// Baseline values may come from the config file (a player's saved
/// profile); the distance and target conditions come from the command line.
pub(crate) fn build_adjust_mode(cli: &Cli, file_config: &FileConfig) -> Result<AppMode> {
    let distance = cli.distance.ok_or_else(|| anyhow!("missing --distance"))?;
    let baseline_temp = cli
        .baseline_temp
        .or(file_config.baseline_temp)
        .ok_or_else(|| anyhow!("missing --baseline-temp"))?;
    let baseline_elevation = cli
        .baseline_elevation
        .or(file_config.baseline_elevation)
        .ok_or_else(|| anyhow!("missing --baseline-elevation"))?;
    let baseline = BaselineProfile::new(
        baseline_temp,
        baseline_elevation,
        cli.baseline_humidity.or(file_config.baseline_humidity),
    );

    // Unspecified target fields stay at baseline, i.e. no effect.
    let condition = ConditionSet::new(
        cli.temp.unwrap_or(baseline.temperature_f),
        cli.humidity.unwrap_or(baseline.humidity_pct),
        cli.elevation.unwrap_or(baseline.elevation_ft),
    );

    Ok(AppMode::Adjust {
        distance,
        baseline,
        condition,
    })
}
