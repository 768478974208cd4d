use super::{Mode, OutputFormat};
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Adjust club yardages for tournament weather and elevation."
)]
pub struct Cli {
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    #[arg(long)]
    pub config_toml: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,

    /// JSON document with `tournaments` and `registrations`.
    #[arg(long)]
    pub store_json: Option<PathBuf>,
    /// Hourly forecast JSON used to refresh stored conditions.
    #[arg(long)]
    pub weather_json: Option<PathBuf>,
    #[arg(long)]
    pub tournament_id: Option<String>,
    /// Only this player's cards.
    #[arg(long)]
    pub player: Option<String>,
    /// 1-based tournament day; all days when omitted.
    #[arg(long)]
    pub day: Option<usize>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    #[arg(long)]
    pub output_json: Option<PathBuf>,

    #[arg(long, allow_negative_numbers = true)]
    pub distance: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub baseline_temp: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub baseline_elevation: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub baseline_humidity: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub temp: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub elevation: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub humidity: Option<f64>,

    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub end_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    pub mode: Option<Mode>,
    pub log_level: Option<String>,
    pub store_json: Option<PathBuf>,
    pub weather_json: Option<PathBuf>,
    pub tournament_id: Option<String>,
    pub player: Option<String>,
    pub day: Option<usize>,
    pub format: Option<OutputFormat>,
    pub output_json: Option<PathBuf>,
    pub baseline_temp: Option<f64>,
    pub baseline_elevation: Option<f64>,
    pub baseline_humidity: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
