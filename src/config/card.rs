use super::cli::{Cli, FileConfig};
use super::parse::day_to_index;
use super::{AppMode, CardOptions};
use anyhow::{Result, anyhow};

pub(crate) fn build_card_mode(cli: &Cli, file_config: &FileConfig) -> Result<AppMode> {
    let store_json = cli
        .store_json
        .clone()
        .or_else(|| file_config.store_json.clone())
        .ok_or_else(|| anyhow!("missing --store-json"))?;
    let tournament_id = cli
        .tournament_id
        .clone()
        .or_else(|| file_config.tournament_id.clone())
        .ok_or_else(|| anyhow!("missing --tournament-id"))?;
    let day_index = cli.day.or(file_config.day).map(day_to_index).transpose()?;

    Ok(AppMode::Card(Box::new(CardOptions {
        store_json,
        weather_json: cli
            .weather_json
            .clone()
            .or_else(|| file_config.weather_json.clone()),
        tournament_id,
        player: cli.player.clone().or_else(|| file_config.player.clone()),
        day_index,
        format: cli.format.or(file_config.format).unwrap_or_default(),
        output_json: cli
            .output_json
            .clone()
            .or_else(|| file_config.output_json.clone()),
    })))
}
