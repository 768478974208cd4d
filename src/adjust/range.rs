use crate::error::CoreError;
use crate::model::ConditionSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Temperature and humidity spread across a day's samples, for the banner
/// printed at the top of a card.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RangeSummary {
    pub min_temp: f64,
    pub max_temp: f64,
    pub min_humidity: f64,
    pub max_humidity: f64,
}

/// Min/max over any number of samples. An empty slice has no range.
///
/// # Errors
/// Returns `InvalidInput` if a sample temperature or humidity is not finite.
pub fn summarize_range(conditions: &[ConditionSet]) -> Result<Option<RangeSummary>, CoreError> {
    let mut summary: Option<RangeSummary> = None;
    for (i, c) in conditions.iter().enumerate() {
        if !c.temperature_f.is_finite() {
            return Err(CoreError::non_finite(
                &format!("sample {i} temperature"),
                c.temperature_f,
            ));
        }
        if !c.humidity_pct.is_finite() {
            return Err(CoreError::non_finite(
                &format!("sample {i} humidity"),
                c.humidity_pct,
            ));
        }
        summary = Some(match summary {
            None => RangeSummary {
                min_temp: c.temperature_f,
                max_temp: c.temperature_f,
                min_humidity: c.humidity_pct,
                max_humidity: c.humidity_pct,
            },
            Some(s) => RangeSummary {
                min_temp: s.min_temp.min(c.temperature_f),
                max_temp: s.max_temp.max(c.temperature_f),
                min_humidity: s.min_humidity.min(c.humidity_pct),
                max_humidity: s.max_humidity.max(c.humidity_pct),
            },
        });
    }
    Ok(summary)
}

impl RangeSummary {
    #[must_use]
    pub fn temperature_label(&self) -> String {
        format!("{}°F - {}°F", self.min_temp, self.max_temp)
    }

    #[must_use]
    pub fn humidity_label(&self) -> String {
        format!("{}% - {}%", self.min_humidity, self.max_humidity)
    }
}

impl fmt::Display for RangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Temp: {}  Humidity: {}",
            self.temperature_label(),
            self.humidity_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_across_samples() {
        let samples = [
            ConditionSet::new(68.0, 75.0, 400.0),
            ConditionSet::new(82.0, 55.0, 400.0),
            ConditionSet::new(74.0, 65.0, 400.0),
        ];
        let s = summarize_range(&samples).unwrap().unwrap();
        assert_eq!(
            s,
            RangeSummary {
                min_temp: 68.0,
                max_temp: 82.0,
                min_humidity: 55.0,
                max_humidity: 75.0,
            }
        );
        assert_eq!(s.temperature_label(), "68°F - 82°F");
        assert_eq!(s.humidity_label(), "55% - 75%");
    }

    #[test]
    fn constant_day_and_empty_input() {
        let flat = [ConditionSet::new(70.0, 50.0, 0.0); 3];
        let s = summarize_range(&flat).unwrap().unwrap();
        assert_eq!(s.min_temp, s.max_temp);
        assert!(summarize_range(&[]).unwrap().is_none());
    }

    #[test]
    fn nan_sample_is_invalid() {
        let samples = [
            ConditionSet::new(70.0, 50.0, 0.0),
            ConditionSet::new(70.0, f64::NAN, 0.0),
        ];
        assert!(summarize_range(&samples).unwrap_err().is_invalid_input());
    }
}
