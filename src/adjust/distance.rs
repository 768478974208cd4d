use crate::error::CoreError;
use crate::model::{BaselineProfile, ConditionSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Share of distance gained per degree Fahrenheit above baseline.
pub const TEMPERATURE_COEFFICIENT: f64 = 0.002;
/// Share of distance gained per 1000 ft above baseline.
pub const ELEVATION_COEFFICIENT: f64 = 0.02;
/// Share of distance gained per 100 percentage points of humidity.
pub const HUMIDITY_COEFFICIENT: f64 = 0.01;

/// 2^63: the first whole number past `i64::MAX`.
const WHOLE_YARDS_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn finite(field: &str, value: f64) -> Result<f64, CoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::non_finite(field, value))
    }
}

/// Unrounded adjusted distance. Temperature, then elevation, then humidity,
/// each factor applied to the previous step's output.
///
/// Finite inputs always produce a value, though an extreme product may
/// overflow to an infinity.
///
/// # Errors
/// Returns `InvalidInput` if any input is not finite.
pub fn raw_adjusted_distance(
    base_distance: f64,
    baseline: &BaselineProfile,
    condition: &ConditionSet,
) -> Result<f64, CoreError> {
    let base = finite("base distance", base_distance)?;
    let temp_delta = finite("condition temperature", condition.temperature_f)?
        - finite("baseline temperature", baseline.temperature_f)?;
    let elev_delta = finite("condition elevation", condition.elevation_ft)?
        - finite("baseline elevation", baseline.elevation_ft)?;
    let humidity_delta = finite("condition humidity", condition.humidity_pct)?
        - finite("baseline humidity", baseline.humidity_pct)?;

    let d1 = base * (1.0 + TEMPERATURE_COEFFICIENT * temp_delta);
    let d2 = d1 * (1.0 + ELEVATION_COEFFICIENT * (elev_delta / 1000.0));
    Ok(d2 * (1.0 + HUMIDITY_COEFFICIENT * (humidity_delta / 100.0)))
}

/// Adjusted distance in whole yards, rounded half away from zero.
///
/// Range policy is not checked here: any finite input yields a number as
/// long as the rounded result fits in an `i64`.
///
/// # Errors
/// Returns `InvalidInput` if any input is not finite, or if the rounded
/// result (including a product that overflowed to infinity) lies outside
/// the `i64` range.
#[allow(clippy::cast_possible_truncation)]
pub fn adjusted_distance(
    base_distance: f64,
    baseline: &BaselineProfile,
    condition: &ConditionSet,
) -> Result<i64, CoreError> {
    let rounded = raw_adjusted_distance(base_distance, baseline, condition)?.round();
    if (-WHOLE_YARDS_LIMIT..WHOLE_YARDS_LIMIT).contains(&rounded) {
        Ok(rounded as i64)
    } else {
        Err(CoreError::out_of_range(rounded))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    Longer,
    Shorter,
    Unchanged,
}

/// An adjusted club distance and its signed change from the baseline.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Adjustment {
    pub yards: i64,
    pub delta: i64,
}

impl Adjustment {
    #[must_use]
    pub fn effect(&self) -> Effect {
        match self.delta.signum() {
            1 => Effect::Longer,
            -1 => Effect::Shorter,
            _ => Effect::Unchanged,
        }
    }

    /// The delta as drawn beside a distance: `+6`, `-4`, or nothing.
    #[must_use]
    pub fn delta_label(&self) -> String {
        match self.effect() {
            Effect::Longer => format!("+{}", self.delta),
            Effect::Shorter => self.delta.to_string(),
            Effect::Unchanged => String::new(),
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.effect() {
            Effect::Unchanged => write!(f, "{}", self.yards),
            _ => write!(f, "{} ({})", self.yards, self.delta_label()),
        }
    }
}

/// Adjust one club's carry distance for a condition set.
///
/// # Errors
/// Returns `InvalidInput` if a baseline or condition field is not finite.
pub fn adjust_club(
    base_yards: u32,
    baseline: &BaselineProfile,
    condition: &ConditionSet,
) -> Result<Adjustment, CoreError> {
    let yards = adjusted_distance(f64::from(base_yards), baseline, condition)?;
    let delta = yards
        .checked_sub(i64::from(base_yards))
        .ok_or_else(|| CoreError::out_of_range(f64::from(base_yards)))?;
    Ok(Adjustment { yards, delta })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> BaselineProfile {
        BaselineProfile::new(70.0, 0.0, Some(50.0))
    }

    #[test]
    fn worked_example() {
        let condition = ConditionSet::new(90.0, 50.0, 2000.0);
        let raw = raw_adjusted_distance(150.0, &baseline(), &condition).unwrap();
        assert!((raw - 162.24).abs() < 1e-9);
        let adj = adjust_club(150, &baseline(), &condition).unwrap();
        assert_eq!(adj, Adjustment { yards: 162, delta: 12 });
        assert_eq!(adj.delta_label(), "+12");
        assert_eq!(adj.to_string(), "162 (+12)");
    }

    #[test]
    fn rounds_to_nearest_yard() {
        // 125.25 and 375.75
        let condition = ConditionSet::new(71.0, 50.0, 0.0);
        assert_eq!(adjusted_distance(125.0, &baseline(), &condition).unwrap(), 125);
        assert_eq!(adjusted_distance(375.0, &baseline(), &condition).unwrap(), 376);
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let condition = ConditionSet::new(f64::NAN, 50.0, 0.0);
        let err = adjusted_distance(150.0, &baseline(), &condition).unwrap_err();
        assert!(err.is_invalid_input());

        let condition = ConditionSet::matching(&baseline());
        assert!(adjusted_distance(f64::INFINITY, &baseline(), &condition).is_err());

        let mut bad = baseline();
        bad.humidity_pct = f64::NEG_INFINITY;
        assert!(adjusted_distance(150.0, &bad, &condition).is_err());
    }

    #[test]
    fn results_past_whole_yard_range_are_rejected() {
        let same = ConditionSet::matching(&baseline());
        assert_eq!(raw_adjusted_distance(1e300, &baseline(), &same).unwrap(), 1e300);
        let err = adjusted_distance(1e300, &baseline(), &same).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("out of range"));
        assert!(adjusted_distance(-1e300, &baseline(), &same).is_err());

        // Finite inputs whose product overflows.
        let hot = ConditionSet::new(170.0, 50.0, 0.0);
        let raw = raw_adjusted_distance(1.7e308, &baseline(), &hot).unwrap();
        assert!(raw.is_infinite());
        let err = adjusted_distance(1.7e308, &baseline(), &hot).unwrap_err();
        assert!(err.to_string().contains("out of range"));

        // Largest representable results still come back as numbers.
        assert_eq!(adjusted_distance(1e18, &baseline(), &same).unwrap(), 1_000_000_000_000_000_000);
    }

    #[test]
    fn out_of_policy_values_still_compute() {
        let condition = ConditionSet::new(140.0, 100.0, 15_000.0);
        assert!(adjusted_distance(5.0, &baseline(), &condition).is_ok());
        assert!(adjusted_distance(900.0, &baseline(), &condition).is_ok());
    }

    #[test]
    fn shorter_and_unchanged_labels() {
        let cold = ConditionSet::new(50.0, 50.0, 0.0);
        let adj = adjust_club(200, &baseline(), &cold).unwrap();
        assert_eq!(adj, Adjustment { yards: 192, delta: -8 });
        assert_eq!(adj.effect(), Effect::Shorter);
        assert_eq!(adj.delta_label(), "-8");

        let same = adjust_club(200, &baseline(), &ConditionSet::matching(&baseline())).unwrap();
        assert_eq!(same.effect(), Effect::Unchanged);
        assert_eq!(same.delta_label(), "");
        assert_eq!(same.to_string(), "200");
    }
}
