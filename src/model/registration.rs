use crate::error::{CoreError, ValidationIssue};
use crate::model::club::{ClubEntry, MAX_BAG_SIZE, MIN_BAG_SIZE};
use crate::model::tournament::parse_timestamp;
use crate::model::types::{BaselineProfile, DEFAULT_HUMIDITY_PCT};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const TEMPERATURE_RANGE_F: RangeInclusive<f64> = 20.0..=120.0;
pub const ELEVATION_RANGE_FT: RangeInclusive<f64> = 0.0..=12_000.0;
pub const HUMIDITY_RANGE_PCT: RangeInclusive<f64> = 0.0..=100.0;
pub const DISTANCE_RANGE_YARDS: RangeInclusive<u32> = 20..=400;

fn default_humidity() -> f64 {
    DEFAULT_HUMIDITY_PCT
}

/// A player's registration as submitted through intake.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub tournament_id: String,
    pub player_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_email: Option<String>,
    pub baseline_temp: f64,
    pub baseline_elevation: f64,
    #[serde(default = "default_humidity")]
    pub baseline_humidity: f64,
    pub clubs: Vec<ClubEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}

impl Registration {
    #[must_use]
    pub fn baseline(&self) -> BaselineProfile {
        BaselineProfile::new(
            self.baseline_temp,
            self.baseline_elevation,
            Some(self.baseline_humidity),
        )
    }

    /// When the registration was submitted, if recorded.
    ///
    /// # Errors
    /// Returns `Parse` for an unreadable timestamp.
    pub fn submitted_time(&self) -> Result<Option<NaiveDateTime>, CoreError> {
        self.submitted_at.as_deref().map(parse_timestamp).transpose()
    }

    /// Check the record against the intake range policy. Every problem is
    /// reported, not just the first.
    ///
    /// # Errors
    /// Returns `CoreError::Validation` listing each field out of policy.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut issues = Vec::new();

        if self.player_name.trim().is_empty() {
            issues.push(ValidationIssue::new("playerName", "please enter your name"));
        }
        check_range(
            &mut issues,
            "baselineTemp",
            self.baseline_temp,
            &TEMPERATURE_RANGE_F,
            "°F",
        );
        check_range(
            &mut issues,
            "baselineElevation",
            self.baseline_elevation,
            &ELEVATION_RANGE_FT,
            "ft",
        );
        check_range(
            &mut issues,
            "baselineHumidity",
            self.baseline_humidity,
            &HUMIDITY_RANGE_PCT,
            "%",
        );

        if self.clubs.len() < MIN_BAG_SIZE || self.clubs.len() > MAX_BAG_SIZE {
            issues.push(ValidationIssue::new(
                "clubs",
                format!(
                    "bag must hold {MIN_BAG_SIZE}-{MAX_BAG_SIZE} clubs, found {}",
                    self.clubs.len()
                ),
            ));
        }
        for (i, club) in self.clubs.iter().enumerate() {
            if !DISTANCE_RANGE_YARDS.contains(&club.base_distance_yards) {
                issues.push(ValidationIssue::new(
                    format!("clubs[{i}].distance"),
                    format!(
                        "please enter a valid distance for {} ({}-{} yards)",
                        club.name,
                        DISTANCE_RANGE_YARDS.start(),
                        DISTANCE_RANGE_YARDS.end()
                    ),
                ));
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(issues))
        }
    }
}

fn check_range(
    issues: &mut Vec<ValidationIssue>,
    field: &str,
    value: f64,
    range: &RangeInclusive<f64>,
    unit: &str,
) {
    // NaN fails `contains`, so it lands here too.
    if !range.contains(&value) {
        issues.push(ValidationIssue::new(
            field,
            format!(
                "must be within {}-{}{unit}, got {value}",
                range.start(),
                range.end()
            ),
        ));
    }
}
