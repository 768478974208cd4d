use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_HUMIDITY_PCT: f64 = 50.0;

/// A player's personal reference point: the conditions their club
/// distances were measured in.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BaselineProfile {
    pub temperature_f: f64,
    pub elevation_ft: f64,
    pub humidity_pct: f64,
}

impl BaselineProfile {
    /// Humidity falls back to 50% when the player left it blank.
    #[must_use]
    pub fn new(temperature_f: f64, elevation_ft: f64, humidity_pct: Option<f64>) -> Self {
        Self {
            temperature_f,
            elevation_ft,
            humidity_pct: humidity_pct.unwrap_or(DEFAULT_HUMIDITY_PCT),
        }
    }
}

/// The weather and elevation a distance is adjusted to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ConditionSet {
    pub temperature_f: f64,
    pub humidity_pct: f64,
    pub elevation_ft: f64,
}

impl ConditionSet {
    #[must_use]
    pub fn new(temperature_f: f64, humidity_pct: f64, elevation_ft: f64) -> Self {
        Self {
            temperature_f,
            humidity_pct,
            elevation_ft,
        }
    }

    /// The condition set that leaves every distance unchanged.
    #[must_use]
    pub fn matching(baseline: &BaselineProfile) -> Self {
        Self::new(
            baseline.temperature_f,
            baseline.humidity_pct,
            baseline.elevation_ft,
        )
    }
}

/// Temperature and humidity for one time of day. Elevation lives on the
/// tournament, not here.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct WeatherSample {
    pub temperature_f: f64,
    pub humidity_pct: f64,
}

impl WeatherSample {
    #[must_use]
    pub fn new(temperature_f: f64, humidity_pct: f64) -> Self {
        Self {
            temperature_f,
            humidity_pct,
        }
    }

    #[must_use]
    pub fn at_elevation(self, elevation_ft: f64) -> ConditionSet {
        ConditionSet::new(self.temperature_f, self.humidity_pct, elevation_ft)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Morning => "Morn",
            Self::Afternoon => "Aftn",
            Self::Evening => "Eve",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        };
        write!(f, "{s}")
    }
}

/// One calendar day of a tournament with its three time-of-day samples.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TournamentDay {
    pub date: NaiveDate,
    pub morning: WeatherSample,
    pub afternoon: WeatherSample,
    pub evening: WeatherSample,
}

impl TournamentDay {
    #[must_use]
    pub fn sample(&self, time: TimeOfDay) -> WeatherSample {
        match time {
            TimeOfDay::Morning => self.morning,
            TimeOfDay::Afternoon => self.afternoon,
            TimeOfDay::Evening => self.evening,
        }
    }

    pub fn sample_mut(&mut self, time: TimeOfDay) -> &mut WeatherSample {
        match time {
            TimeOfDay::Morning => &mut self.morning,
            TimeOfDay::Afternoon => &mut self.afternoon,
            TimeOfDay::Evening => &mut self.evening,
        }
    }
}

/// A tournament day with the tournament elevation folded into every sample.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DayConditions {
    pub date: NaiveDate,
    pub morning: ConditionSet,
    pub afternoon: ConditionSet,
    pub evening: ConditionSet,
}

impl DayConditions {
    #[must_use]
    pub fn get(&self, time: TimeOfDay) -> ConditionSet {
        match time {
            TimeOfDay::Morning => self.morning,
            TimeOfDay::Afternoon => self.afternoon,
            TimeOfDay::Evening => self.evening,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> [ConditionSet; 3] {
        [self.morning, self.afternoon, self.evening]
    }
}
