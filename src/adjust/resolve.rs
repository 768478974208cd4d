use crate::error::CoreError;
use crate::model::{DayConditions, Tournament};

/// Conditions for the `day_index`-th (0-based) day of a tournament, with the
/// tournament elevation applied to every time of day. A legacy single-day
/// tournament answers only for index 0.
///
/// # Errors
/// Returns `IndexOutOfRange` when the tournament has no such day.
pub fn resolve_day_conditions(
    tournament: &Tournament,
    day_index: usize,
) -> Result<DayConditions, CoreError> {
    let days = tournament.days();
    let day = days.get(day_index).ok_or(CoreError::IndexOutOfRange {
        index: day_index,
        len: days.len(),
    })?;
    let elevation = tournament.elevation_ft;
    Ok(DayConditions {
        date: day.date,
        morning: day.morning.at_elevation(elevation),
        afternoon: day.afternoon.at_elevation(elevation),
        evening: day.evening.at_elevation(elevation),
    })
}
