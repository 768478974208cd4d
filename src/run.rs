use crate::card::{YardageCard, build_card, build_cards};
use crate::config::{AppMode, CardOptions, OutputFormat};
use crate::error::CoreError;
use crate::schedule::plan_days;
use crate::store::{JsonStore, TournamentStore};
use crate::weather::{JsonWeatherSource, WeatherSource, refresh_days};
use crate::{adjust_club, adjusted_distance};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Cards for every registration (or one player) of a tournament. When a
/// weather source is given its forecast replaces stored conditions first.
///
/// # Errors
/// Returns `NotFound` for an unknown tournament or player, and any error
/// raised while building a card.
pub fn collect_cards(
    store: &dyn TournamentStore,
    weather: Option<&dyn WeatherSource>,
    tournament_id: &str,
    player: Option<&str>,
    day_index: Option<usize>,
) -> Result<Vec<YardageCard>, CoreError> {
    let mut tournament = store.tournament(tournament_id)?;
    if let Some(source) = weather {
        tournament = tournament.with_days(refresh_days(tournament.days(), source));
    }

    let registrations: Vec<_> = store
        .registrations(tournament_id)?
        .into_iter()
        .filter(|r| player.is_none_or(|p| r.player_name.eq_ignore_ascii_case(p.trim())))
        .collect();
    if registrations.is_empty() {
        return Err(CoreError::NotFound(match player {
            Some(p) => format!("registration for {p} in {tournament_id}"),
            None => format!("registrations for {tournament_id}"),
        }));
    }

    let mut cards = Vec::new();
    for registration in &registrations {
        if let Err(e) = registration.validate() {
            // Intake should have caught this; the card is still produced.
            warn!(player = %registration.player_name, error = %e, "registration outside range policy");
        }
        match tournament.submitted_on_time(registration) {
            Ok(true) => {}
            Ok(false) => warn!(player = %registration.player_name, "registration submitted after cutoff"),
            Err(e) => warn!(player = %registration.player_name, error = %e, "unreadable submission time"),
        }
        match day_index {
            Some(day) => cards.push(build_card(&tournament, registration, day)?),
            None => cards.extend(build_cards(&tournament, registration)?),
        }
    }
    info!(tournament = %tournament_id, cards = cards.len(), "cards built");
    Ok(cards)
}

fn write_json(path: &Path, value: &impl serde::Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote json output");
    Ok(())
}

fn run_card_mode(opts: &CardOptions) -> Result<()> {
    let store = JsonStore::from_path(&opts.store_json)
        .with_context(|| format!("load store {}", opts.store_json.display()))?;
    let weather = match opts.weather_json.as_deref() {
        Some(path) => match JsonWeatherSource::from_path(path) {
            Ok(source) => Some(source),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "weather unavailable, using stored conditions");
                None
            }
        },
        None => None,
    };
    let cards = collect_cards(
        &store,
        weather.as_ref().map(|w| w as &dyn WeatherSource),
        &opts.tournament_id,
        opts.player.as_deref(),
        opts.day_index,
    )?;

    match opts.format {
        OutputFormat::Text => {
            for card in &cards {
                println!("{card}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cards)?),
    }
    if let Some(path) = opts.output_json.as_deref() {
        write_json(path, &cards)?;
    }
    Ok(())
}

/// Execute a resolved mode, printing to stdout.
///
/// # Errors
/// Returns an error if loading input, computing, or writing output fails.
pub fn run(mode: &AppMode) -> Result<()> {
    match mode {
        AppMode::Card(opts) => run_card_mode(opts),
        AppMode::Adjust {
            distance,
            baseline,
            condition,
        } => {
            if distance.fract() == 0.0 && *distance >= 0.0 && *distance <= f64::from(u32::MAX) {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let adjustment = adjust_club(*distance as u32, baseline, condition)?;
                println!("{adjustment}");
            } else {
                println!("{}", adjusted_distance(*distance, baseline, condition)?);
            }
            Ok(())
        }
        AppMode::Plan {
            start,
            end,
            output_json,
        } => {
            let days = plan_days(*start, *end)?;
            println!("{}", serde_json::to_string_pretty(&days)?);
            if let Some(path) = output_json.as_deref() {
                write_json(path, &days)?;
            }
            Ok(())
        }
    }
}
