use crate::model::parse_date;
use anyhow::{Result, anyhow};
use chrono::NaiveDate;

pub(crate) fn parse_cli_date(flag: &str, value: &str) -> Result<NaiveDate> {
    parse_date(value).map_err(|e| anyhow!("--{flag}: {e}"))
}

/// `--day` counts from 1 the way cards print it.
pub(crate) fn day_to_index(day: usize) -> Result<usize> {
    day.checked_sub(1)
        .ok_or_else(|| anyhow!("--day counts from 1, got 0"))
}
