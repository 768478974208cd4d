use rusty_yardage::model::{ConditionSet, Schedule, Tournament, TournamentRecord};
use rusty_yardage::{CoreError, resolve_day_conditions};
use serde_json::json;

fn three_day() -> Result<Tournament, Box<dyn std::error::Error>> {
    let record: TournamentRecord = serde_json::from_value(json!({
        "id": "spring",
        "name": "Spring Invitational",
        "course": "Pine Hollow",
        "elevation": 650,
        "days": [
            {"date": "2026-04-10", "morningTemp": 55, "morningHumidity": 40,
             "afternoonTemp": 71, "afternoonHumidity": 60, "eveningTemp": 64, "eveningHumidity": 50},
            {"date": "2026-04-11", "morningTemp": 64, "morningHumidity": 50,
             "afternoonTemp": 80, "afternoonHumidity": 45, "eveningTemp": 71, "eveningHumidity": 60},
            {"date": "2026-04-12", "morningTemp": 55, "morningHumidity": 40,
             "afternoonTemp": 64, "afternoonHumidity": 50, "eveningTemp": 80, "eveningHumidity": 45}
        ]
    }))?;
    Ok(Tournament::try_from(record)?)
}

#[test]
fn test02_multi_day_bounds() -> Result<(), Box<dyn std::error::Error>> {
    let tournament = three_day()?;
    assert!(matches!(tournament.schedule, Schedule::MultiDay(_)));
    for index in 0..3 {
        resolve_day_conditions(&tournament, index)?;
    }
    for index in [3, 1000] {
        let err = resolve_day_conditions(&tournament, index).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(err, CoreError::IndexOutOfRange { len: 3, .. }));
    }

    let day2 = resolve_day_conditions(&tournament, 1)?;
    assert_eq!(day2.date.to_string(), "2026-04-11");
    assert_eq!(day2.afternoon, ConditionSet::new(80.0, 45.0, 650.0));
    Ok(())
}

#[test]
fn test02_elevation_shared_by_every_time_of_day() -> Result<(), Box<dyn std::error::Error>> {
    let tournament = three_day()?;
    for index in 0..3 {
        let day = resolve_day_conditions(&tournament, index)?;
        assert!(day.as_array().iter().all(|c| c.elevation_ft == 650.0));
    }
    Ok(())
}

#[test]
fn test02_legacy_single_day() -> Result<(), Box<dyn std::error::Error>> {
    let record: TournamentRecord = serde_json::from_value(json!({
        "id": "member-guest-2025",
        "name": "Member-Guest Championship",
        "course": "Hope Valley Country Club",
        "date": "2025-06-14",
        "elevation": 400,
        "morningTemp": 68,
        "afternoonTemp": 82,
        "eveningTemp": 74
    }))?;
    let tournament = Tournament::try_from(record)?;
    assert!(matches!(tournament.schedule, Schedule::LegacySingleDay(_)));

    let day = resolve_day_conditions(&tournament, 0)?;
    assert_eq!(day.date.to_string(), "2025-06-14");
    assert_eq!(day.morning.temperature_f, 68.0);
    assert_eq!(day.afternoon.temperature_f, 82.0);
    assert_eq!(day.evening.temperature_f, 74.0);
    assert!(day.as_array().iter().all(|c| c.elevation_ft == 400.0));
    assert!(day.as_array().iter().all(|c| c.humidity_pct == 50.0));

    assert!(resolve_day_conditions(&tournament, 1).is_err());
    Ok(())
}

#[test]
fn test02_legacy_start_date_and_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let record: TournamentRecord = serde_json::from_value(json!({
        "id": "scramble",
        "name": "Annual Charity Scramble",
        "startDate": "2025-08-02",
        "elevation": 200,
        "morningTemp": 75, "morningHumidity": 80,
        "afternoonTemp": 92, "afternoonHumidity": 45,
        "eveningTemp": 82, "eveningHumidity": 55
    }))?;
    let tournament = Tournament::try_from(record)?;
    let again = Tournament::try_from(tournament.to_record())?;
    assert_eq!(again, tournament);
    Ok(())
}

#[test]
fn test02_day_count_checked_at_boundary() -> Result<(), Box<dyn std::error::Error>> {
    let day = json!({"date": "2026-04-10", "morningTemp": 55, "afternoonTemp": 71, "eveningTemp": 64});
    for count in [0, 8] {
        let record: TournamentRecord = serde_json::from_value(json!({
            "id": "bad",
            "name": "Bad",
            "elevation": 0,
            "days": vec![day.clone(); count]
        }))?;
        assert!(matches!(
            Tournament::try_from(record),
            Err(CoreError::Validation(_))
        ));
    }

    let record: TournamentRecord = serde_json::from_value(json!({
        "id": "undated", "name": "Undated", "elevation": 0,
        "morningTemp": 60, "afternoonTemp": 70, "eveningTemp": 65
    }))?;
    assert!(matches!(Tournament::try_from(record), Err(CoreError::Parse(_))));
    Ok(())
}
