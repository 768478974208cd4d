use crate::model::{BaselineProfile, ConditionSet};
use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

mod adjust;
mod card;
mod cli;
mod parse;
mod plan;

pub use cli::Cli;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Card,
    Adjust,
    Plan,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardOptions {
    pub store_json: PathBuf,
    pub weather_json: Option<PathBuf>,
    pub tournament_id: String,
    pub player: Option<String>,
    /// 0-based; `None` means every day.
    pub day_index: Option<usize>,
    pub format: OutputFormat,
    pub output_json: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Card(Box<CardOptions>),
    Adjust {
        distance: f64,
        baseline: BaselineProfile,
        condition: ConditionSet,
    },
    Plan {
        start: NaiveDate,
        end: NaiveDate,
        output_json: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: String,
    pub mode: AppMode,
}

/// Load config from CLI and optional TOML file. CLI values win.
///
/// # Errors
/// Returns an error if required values are missing, the config file is
/// unreadable or invalid, or a value cannot be parsed.
pub fn load_config(cli: Cli) -> Result<AppConfig> {
    let file_config = read_file_config(&cli)?;
    let mode = cli
        .mode
        .or(file_config.mode)
        .ok_or_else(|| anyhow!("missing --mode"))?;
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| file_config.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let mode = match mode {
        Mode::Card => card::build_card_mode(&cli, &file_config)?,
        Mode::Adjust => adjust::build_adjust_mode(&cli, &file_config)?,
        Mode::Plan => plan::build_plan_mode(&cli, &file_config)?,
    };
    Ok(AppConfig { log_level, mode })
}

fn read_file_config(cli: &Cli) -> Result<cli::FileConfig> {
    match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<cli::FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))
        }
        None => Ok(cli::FileConfig::default()),
    }
}
