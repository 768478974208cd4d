use crate::error::CoreError;
use crate::model::{TimeOfDay, TournamentDay, WeatherSample};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Clock hour sampled for each time of day.
pub const SAMPLE_HOURS: [(TimeOfDay, u32); 3] = [
    (TimeOfDay::Morning, 8),
    (TimeOfDay::Afternoon, 13),
    (TimeOfDay::Evening, 17),
];

#[derive(Deserialize)]
struct HourlyDocument {
    hourly: HourlyColumns,
}

#[derive(Deserialize)]
struct HourlyColumns {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
    relative_humidity_2m: Vec<Option<f64>>,
}

/// Hourly temperature/humidity keyed by calendar date and clock hour.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HourlyForecast {
    samples: BTreeMap<(NaiveDate, u32), WeatherSample>,
}

impl HourlyForecast {
    pub fn insert(&mut self, date: NaiveDate, hour: u32, sample: WeatherSample) {
        self.samples.insert((date, hour), sample);
    }

    #[must_use]
    pub fn sample(&self, date: NaiveDate, hour: u32) -> Option<WeatherSample> {
        self.samples.get(&(date, hour)).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Only the hours that fall on `date`.
    #[must_use]
    pub fn for_date(&self, date: NaiveDate) -> Self {
        Self {
            samples: self
                .samples
                .range((date, 0)..=(date, 23))
                .map(|(k, v)| (*k, *v))
                .collect(),
        }
    }

    /// Parse an hourly forecast document (`hourly.time`,
    /// `hourly.temperature_2m`, `hourly.relative_humidity_2m`). Hours with a
    /// null reading are skipped; values are rounded to whole units.
    ///
    /// # Errors
    /// Returns `Parse` for malformed JSON, mismatched column lengths, or an
    /// unreadable timestamp.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let doc: HourlyDocument = serde_json::from_str(json)?;
        let cols = doc.hourly;
        if cols.time.len() != cols.temperature_2m.len()
            || cols.time.len() != cols.relative_humidity_2m.len()
        {
            return Err(CoreError::Parse(format!(
                "hourly columns differ in length: time {}, temperature {}, humidity {}",
                cols.time.len(),
                cols.temperature_2m.len(),
                cols.relative_humidity_2m.len()
            )));
        }

        let mut forecast = Self::default();
        for ((time, temp), humidity) in cols
            .time
            .iter()
            .zip(cols.temperature_2m)
            .zip(cols.relative_humidity_2m)
        {
            let stamp = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M")
                .map_err(|e| CoreError::Parse(format!("hourly time '{time}': {e}")))?;
            let (Some(temp), Some(humidity)) = (temp, humidity) else {
                continue;
            };
            forecast.insert(
                stamp.date(),
                stamp.hour(),
                WeatherSample::new(temp.round(), humidity.round()),
            );
        }
        Ok(forecast)
    }
}

pub trait WeatherSource: Send + Sync {
    /// Hourly samples covering `date`.
    ///
    /// # Errors
    /// Implementations fail when no forecast can be produced for the date.
    fn forecast(&self, date: NaiveDate) -> Result<HourlyForecast, CoreError>;
}

/// A forecast document read from disk once and served per date.
#[derive(Clone, Debug)]
pub struct JsonWeatherSource {
    forecast: HourlyForecast,
}

impl JsonWeatherSource {
    #[must_use]
    pub fn new(forecast: HourlyForecast) -> Self {
        Self { forecast }
    }

    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Other(format!("read {}: {e}", path.display())))?;
        let forecast = HourlyForecast::from_json(&contents)?;
        info!(path = %path.display(), hours = forecast.len(), "loaded hourly forecast");
        Ok(Self { forecast })
    }
}

impl WeatherSource for JsonWeatherSource {
    fn forecast(&self, date: NaiveDate) -> Result<HourlyForecast, CoreError> {
        let day = self.forecast.for_date(date);
        if day.is_empty() {
            Err(CoreError::NotFound(format!("no forecast hours for {date}")))
        } else {
            Ok(day)
        }
    }
}

/// Replace stored samples with fresh forecast values keyed by date and
/// sample hour. A failed fetch or a missing hour keeps the stored sample.
#[must_use]
pub fn refresh_days(days: &[TournamentDay], source: &dyn WeatherSource) -> Vec<TournamentDay> {
    days.iter()
        .map(|day| {
            let mut refreshed = day.clone();
            let forecast = match source.forecast(day.date) {
                Ok(forecast) => forecast,
                Err(e) => {
                    warn!(date = %day.date, error = %e, "weather refresh failed, keeping stored conditions");
                    return refreshed;
                }
            };
            for (time, hour) in SAMPLE_HOURS {
                match forecast.sample(day.date, hour) {
                    Some(sample) => *refreshed.sample_mut(time) = sample,
                    None => debug!(date = %day.date, hour, %time, "no forecast for hour"),
                }
            }
            refreshed
        })
        .collect()
}
