use crate::error::{CoreError, ValidationIssue};
use crate::model::{MAX_TOURNAMENT_DAYS, TournamentDay, WeatherSample};
use chrono::{NaiveDate, NaiveDateTime};

pub const DEFAULT_MORNING: WeatherSample = WeatherSample {
    temperature_f: 68.0,
    humidity_pct: 75.0,
};
pub const DEFAULT_AFTERNOON: WeatherSample = WeatherSample {
    temperature_f: 82.0,
    humidity_pct: 55.0,
};
pub const DEFAULT_EVENING: WeatherSample = WeatherSample {
    temperature_f: 74.0,
    humidity_pct: 65.0,
};

/// Lay out one day per calendar date from `start` to `end` inclusive, each
/// seeded with the default morning/afternoon/evening conditions an
/// organizer then edits or refreshes.
///
/// # Errors
/// Returns `Validation` if `end` is before `start` or the span is longer
/// than seven days.
pub fn plan_days(start: NaiveDate, end: NaiveDate) -> Result<Vec<TournamentDay>, CoreError> {
    if end < start {
        return Err(CoreError::Validation(vec![ValidationIssue::new(
            "endDate",
            "end date must be after start date",
        )]));
    }
    let span = (end - start).num_days() + 1;
    if span > MAX_TOURNAMENT_DAYS as i64 {
        return Err(CoreError::Validation(vec![ValidationIssue::new(
            "endDate",
            format!("maximum {MAX_TOURNAMENT_DAYS} days supported, got {span}"),
        )]));
    }
    Ok(start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| TournamentDay {
            date,
            morning: DEFAULT_MORNING,
            afternoon: DEFAULT_AFTERNOON,
            evening: DEFAULT_EVENING,
        })
        .collect())
}

/// Registration stays open up to and including the cutoff instant.
#[must_use]
pub fn registration_open(cutoff: NaiveDateTime, now: NaiveDateTime) -> bool {
    now <= cutoff
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn plans_inclusive_span_with_defaults() {
        let days = plan_days(date("2026-01-29"), date("2026-01-31")).unwrap();
        let dates: Vec<NaiveDate> = days.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![date("2026-01-29"), date("2026-01-30"), date("2026-01-31")]
        );
        assert_eq!(days[1].afternoon, DEFAULT_AFTERNOON);
    }

    #[test]
    fn single_day_and_week_limits() {
        assert_eq!(plan_days(date("2026-03-01"), date("2026-03-01")).unwrap().len(), 1);
        assert_eq!(plan_days(date("2026-03-01"), date("2026-03-07")).unwrap().len(), 7);
        assert!(plan_days(date("2026-03-01"), date("2026-03-08")).is_err());
        assert!(plan_days(date("2026-03-02"), date("2026-03-01")).is_err());
    }

    #[test]
    fn cutoff_is_inclusive() {
        let cutoff = date("2025-06-12").and_hms_opt(18, 0, 0).unwrap();
        assert!(registration_open(cutoff, cutoff));
        assert!(!registration_open(cutoff, cutoff + chrono::Duration::seconds(1)));
    }
}
