use crate::adjust::{Adjustment, RangeSummary, adjust_club, resolve_day_conditions, summarize_range};
use crate::error::CoreError;
use crate::model::{ClubName, Registration, TimeOfDay, Tournament};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const CARD_RULE: &str = "----------------------------------------";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CardRow {
    pub club: ClubName,
    pub base_yards: u32,
    pub morning: Adjustment,
    pub afternoon: Adjustment,
    pub evening: Adjustment,
}

impl CardRow {
    #[must_use]
    pub fn get(&self, time: TimeOfDay) -> Adjustment {
        match time {
            TimeOfDay::Morning => self.morning,
            TimeOfDay::Afternoon => self.afternoon,
            TimeOfDay::Evening => self.evening,
        }
    }
}

/// Everything a renderer needs to draw one player's card for one day.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct YardageCard {
    pub tournament_name: String,
    pub course: String,
    pub player_name: String,
    /// 1-based, only set for multi-day tournaments.
    pub day_number: Option<usize>,
    pub date: NaiveDate,
    pub elevation_ft: f64,
    pub banner: RangeSummary,
    pub column_temps: [f64; 3],
    pub rows: Vec<CardRow>,
}

impl YardageCard {
    #[must_use]
    pub fn date_label(&self) -> String {
        let date = self.date.format("%b %-d, %Y");
        match self.day_number {
            Some(n) => format!("Day {n} • {date}"),
            None => date.to_string(),
        }
    }
}

/// Build the card for one day of a tournament.
///
/// # Errors
/// Returns `IndexOutOfRange` for a day the tournament does not have and
/// `InvalidInput` if any baseline or condition value is not finite.
pub fn build_card(
    tournament: &Tournament,
    registration: &Registration,
    day_index: usize,
) -> Result<YardageCard, CoreError> {
    let conditions = resolve_day_conditions(tournament, day_index)?;
    let banner = summarize_range(&conditions.as_array())?
        .ok_or_else(|| CoreError::Other("day has no condition samples".into()))?;
    let baseline = registration.baseline();

    let rows = registration
        .clubs
        .iter()
        .map(|club| {
            let yards = club.base_distance_yards;
            Ok(CardRow {
                club: club.name,
                base_yards: yards,
                morning: adjust_club(yards, &baseline, &conditions.morning)?,
                afternoon: adjust_club(yards, &baseline, &conditions.afternoon)?,
                evening: adjust_club(yards, &baseline, &conditions.evening)?,
            })
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    debug!(
        tournament = %tournament.id,
        player = %registration.player_name,
        day_index,
        clubs = rows.len(),
        "built yardage card"
    );

    Ok(YardageCard {
        tournament_name: tournament.name.clone(),
        course: tournament.course.clone(),
        player_name: registration.player_name.clone(),
        day_number: tournament
            .schedule
            .is_multi_day()
            .then_some(day_index + 1),
        date: conditions.date,
        elevation_ft: tournament.elevation_ft,
        banner,
        column_temps: conditions.as_array().map(|c| c.temperature_f),
        rows,
    })
}

/// One card per tournament day, in day order.
///
/// # Errors
/// Returns the first error raised by `build_card`.
pub fn build_cards(
    tournament: &Tournament,
    registration: &Registration,
) -> Result<Vec<YardageCard>, CoreError> {
    (0..tournament.days().len())
        .map(|day_index| build_card(tournament, registration, day_index))
        .collect()
}

/// Export file name for a player's cards or a whole tournament's:
/// `Pat O'Neil` -> `Pat_O_Neil_Yardages.pdf`,
/// `Member-Guest 2025` -> `Member_Guest_2025_Yardages.pdf`.
#[must_use]
pub fn card_file_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{stem}_Yardages.pdf")
}

impl fmt::Display for YardageCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.tournament_name)?;
        writeln!(f, "{}", self.course)?;
        writeln!(f, "{CARD_RULE}")?;
        writeln!(f, "{}", self.player_name)?;
        writeln!(f, "{}", self.date_label())?;
        writeln!(f, "Temp: {}", self.banner.temperature_label())?;
        writeln!(f, "Humidity: {}", self.banner.humidity_label())?;
        writeln!(f, "Elevation: {}ft", self.elevation_ft)?;
        writeln!(f, "{CARD_RULE}")?;
        write!(f, "{:<10}", "Club")?;
        for time in TimeOfDay::ALL {
            write!(f, "{:>10}", time.short_label())?;
        }
        writeln!(f)?;
        write!(f, "{:<10}", "")?;
        for temp in self.column_temps {
            write!(f, "{:>10}", format!("{temp}°F"))?;
        }
        writeln!(f)?;
        writeln!(f, "{CARD_RULE}")?;
        for row in &self.rows {
            write!(f, "{:<10}", row.club.label())?;
            for time in TimeOfDay::ALL {
                write!(f, "{:>10}", row.get(time).to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_sanitized() {
        assert_eq!(card_file_name("Pat O'Neil"), "Pat_O_Neil_Yardages.pdf");
        assert_eq!(
            card_file_name("Member-Guest 2025"),
            "Member_Guest_2025_Yardages.pdf"
        );
    }
}
