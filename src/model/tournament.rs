use crate::error::{CoreError, ValidationIssue};
use crate::model::registration::Registration;
use crate::model::types::{DEFAULT_HUMIDITY_PCT, TournamentDay, WeatherSample};
use crate::schedule;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

pub const MAX_TOURNAMENT_DAYS: usize = 7;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn default_humidity() -> f64 {
    DEFAULT_HUMIDITY_PCT
}

/// Per-day entry of a stored tournament document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: String,
    pub morning_temp: f64,
    #[serde(default = "default_humidity")]
    pub morning_humidity: f64,
    pub afternoon_temp: f64,
    #[serde(default = "default_humidity")]
    pub afternoon_humidity: f64,
    pub evening_temp: f64,
    #[serde(default = "default_humidity")]
    pub evening_humidity: f64,
}

impl DayRecord {
    fn into_day(self) -> Result<TournamentDay, CoreError> {
        Ok(TournamentDay {
            date: parse_date(&self.date)?,
            morning: WeatherSample::new(self.morning_temp, self.morning_humidity),
            afternoon: WeatherSample::new(self.afternoon_temp, self.afternoon_humidity),
            evening: WeatherSample::new(self.evening_temp, self.evening_humidity),
        })
    }

    fn from_day(day: &TournamentDay) -> Self {
        Self {
            date: day.date.format(DATE_FORMAT).to_string(),
            morning_temp: day.morning.temperature_f,
            morning_humidity: day.morning.humidity_pct,
            afternoon_temp: day.afternoon.temperature_f,
            afternoon_humidity: day.afternoon.humidity_pct,
            evening_temp: day.evening.temperature_f,
            evening_humidity: day.evening.humidity_pct,
        }
    }
}

/// A tournament document as the store holds it. Older documents carry a
/// single day's conditions at the top level instead of `days`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub course: String,
    pub elevation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_cutoff: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<DayRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning_temp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning_humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afternoon_temp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afternoon_humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening_temp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening_humidity: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Schedule {
    LegacySingleDay(TournamentDay),
    MultiDay(Vec<TournamentDay>),
}

impl Schedule {
    #[must_use]
    pub fn days(&self) -> &[TournamentDay] {
        match self {
            Self::LegacySingleDay(day) => std::slice::from_ref(day),
            Self::MultiDay(days) => days,
        }
    }

    #[must_use]
    pub fn is_multi_day(&self) -> bool {
        self.days().len() > 1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub course: String,
    pub elevation_ft: f64,
    pub registration_cutoff: Option<NaiveDateTime>,
    pub schedule: Schedule,
}

impl Tournament {
    #[must_use]
    pub fn days(&self) -> &[TournamentDay] {
        self.schedule.days()
    }

    /// Open up to and including the cutoff; a tournament without one never
    /// closes.
    #[must_use]
    pub fn registration_open(&self, now: NaiveDateTime) -> bool {
        self.registration_cutoff
            .is_none_or(|cutoff| schedule::registration_open(cutoff, now))
    }

    /// Whether `registration` was submitted while registration was open.
    /// Records without a submission time are treated as on time.
    ///
    /// # Errors
    /// Returns `Parse` if the submission time cannot be read.
    pub fn submitted_on_time(&self, registration: &Registration) -> Result<bool, CoreError> {
        Ok(registration
            .submitted_time()?
            .is_none_or(|at| self.registration_open(at)))
    }

    /// Same tournament with a new set of days, e.g. after a weather refresh.
    #[must_use]
    pub fn with_days(&self, days: Vec<TournamentDay>) -> Self {
        let schedule = match &self.schedule {
            Schedule::LegacySingleDay(_) if days.len() == 1 => {
                let mut days = days;
                Schedule::LegacySingleDay(days.remove(0))
            }
            _ => Schedule::MultiDay(days),
        };
        Self {
            schedule,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn to_record(&self) -> TournamentRecord {
        let mut record = TournamentRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            course: self.course.clone(),
            elevation: self.elevation_ft,
            registration_cutoff: self
                .registration_cutoff
                .map(|cutoff| cutoff.format("%Y-%m-%dT%H:%M:%S").to_string()),
            ..TournamentRecord::default()
        };
        match &self.schedule {
            Schedule::LegacySingleDay(day) => {
                record.date = Some(day.date.format(DATE_FORMAT).to_string());
                record.morning_temp = Some(day.morning.temperature_f);
                record.morning_humidity = Some(day.morning.humidity_pct);
                record.afternoon_temp = Some(day.afternoon.temperature_f);
                record.afternoon_humidity = Some(day.afternoon.humidity_pct);
                record.evening_temp = Some(day.evening.temperature_f);
                record.evening_humidity = Some(day.evening.humidity_pct);
            }
            Schedule::MultiDay(days) => {
                record.start_date = days.first().map(|d| d.date.format(DATE_FORMAT).to_string());
                record.end_date = days.last().map(|d| d.date.format(DATE_FORMAT).to_string());
                record.days = Some(days.iter().map(DayRecord::from_day).collect());
            }
        }
        record
    }
}

impl TryFrom<TournamentRecord> for Tournament {
    type Error = CoreError;

    fn try_from(record: TournamentRecord) -> Result<Self, Self::Error> {
        let registration_cutoff = record
            .registration_cutoff
            .as_deref()
            .map(parse_cutoff)
            .transpose()?;
        let schedule = match record.days {
            Some(days) => {
                if days.is_empty() || days.len() > MAX_TOURNAMENT_DAYS {
                    return Err(CoreError::Validation(vec![ValidationIssue::new(
                        "days",
                        format!(
                            "tournament {} has {} day(s), expected 1-{MAX_TOURNAMENT_DAYS}",
                            record.id,
                            days.len()
                        ),
                    )]));
                }
                Schedule::MultiDay(
                    days.into_iter()
                        .map(DayRecord::into_day)
                        .collect::<Result<Vec<_>, _>>()?,
                )
            }
            None => {
                let date = record
                    .date
                    .as_deref()
                    .or(record.start_date.as_deref())
                    .ok_or_else(|| {
                        CoreError::Parse(format!("tournament {} has no date", record.id))
                    })?;
                let temp = |value: Option<f64>, field: &str| {
                    value.ok_or_else(|| {
                        CoreError::Parse(format!("tournament {} is missing {field}", record.id))
                    })
                };
                Schedule::LegacySingleDay(TournamentDay {
                    date: parse_date(date)?,
                    morning: WeatherSample::new(
                        temp(record.morning_temp, "morningTemp")?,
                        record.morning_humidity.unwrap_or(DEFAULT_HUMIDITY_PCT),
                    ),
                    afternoon: WeatherSample::new(
                        temp(record.afternoon_temp, "afternoonTemp")?,
                        record.afternoon_humidity.unwrap_or(DEFAULT_HUMIDITY_PCT),
                    ),
                    evening: WeatherSample::new(
                        temp(record.evening_temp, "eveningTemp")?,
                        record.evening_humidity.unwrap_or(DEFAULT_HUMIDITY_PCT),
                    ),
                })
            }
        };
        Ok(Self {
            id: record.id,
            name: record.name,
            course: record.course,
            elevation_ft: record.elevation,
            registration_cutoff,
            schedule,
        })
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
/// Returns `Parse` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    Ok(NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)?)
}

/// Parse a stored instant: RFC 3339 (taken as UTC) or a local
/// `YYYY-MM-DDTHH:MM[:SS]`.
///
/// # Errors
/// Returns `Parse` if no accepted format matches.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, CoreError> {
    let value = value.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(stamp.naive_utc());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(stamp);
    }
    Ok(NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")?)
}

fn parse_cutoff(value: &str) -> Result<NaiveDateTime, CoreError> {
    if let Ok(cutoff) = parse_timestamp(value) {
        return Ok(cutoff);
    }
    // A bare date closes at the first instant of that day.
    Ok(parse_date(value)?.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_record(cutoff: Option<&str>) -> TournamentRecord {
        TournamentRecord {
            id: "member-guest-2025".into(),
            name: "Member Guest".into(),
            elevation: 400.0,
            date: Some("2025-06-14".into()),
            registration_cutoff: cutoff.map(String::from),
            morning_temp: Some(68.0),
            afternoon_temp: Some(82.0),
            evening_temp: Some(74.0),
            ..TournamentRecord::default()
        }
    }

    fn at(value: &str) -> NaiveDateTime {
        parse_timestamp(value).unwrap()
    }

    #[test]
    fn cutoff_formats() {
        assert_eq!(parse_cutoff("2025-06-12T18:00:00").unwrap(), at("2025-06-12T18:00"));
        assert_eq!(parse_cutoff("2025-06-12").unwrap(), at("2025-06-12T00:00:00"));
        assert!(parse_cutoff("June 12").is_err());
        assert!(matches!(parse_date("2025-13-01"), Err(CoreError::Parse(_))));
    }

    #[test]
    fn registration_window_follows_cutoff() {
        let t = Tournament::try_from(legacy_record(Some("2025-06-12T18:00"))).unwrap();
        assert!(t.registration_open(at("2025-06-12T18:00:00")));
        assert!(!t.registration_open(at("2025-06-12T18:00:01")));

        let bare = Tournament::try_from(legacy_record(Some("2025-06-12"))).unwrap();
        assert!(!bare.registration_open(at("2025-06-12T09:00")));
        assert!(bare.registration_open(at("2025-06-11T23:59:59")));

        let open = Tournament::try_from(legacy_record(None)).unwrap();
        assert!(open.registration_open(at("2030-01-01T00:00")));
    }

    #[test]
    fn submission_time_checked_against_cutoff() {
        let t = Tournament::try_from(legacy_record(Some("2025-06-12T18:00:00"))).unwrap();
        let mut reg: Registration = serde_json::from_str(
            r#"{"tournamentId": "member-guest-2025", "playerName": "Pat Doe",
                "baselineTemp": 70, "baselineElevation": 0,
                "clubs": [{"name": "Driver", "distance": 250}]}"#,
        )
        .unwrap();
        assert!(t.submitted_on_time(&reg).unwrap());

        reg.submitted_at = Some("2025-06-01T09:30:00Z".into());
        assert!(t.submitted_on_time(&reg).unwrap());
        reg.submitted_at = Some("2025-06-12T18:30:00.000Z".into());
        assert!(!t.submitted_on_time(&reg).unwrap());
        reg.submitted_at = Some("yesterday".into());
        assert!(t.submitted_on_time(&reg).is_err());
    }
}
