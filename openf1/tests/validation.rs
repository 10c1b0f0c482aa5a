//! Validate record deserialization against fixture payloads in `fixtures/`.
//!
//! The fixtures mirror live API responses (offset timestamps, nulled fields,
//! textual gaps) so schema drift against the upstream shapes shows up here
//! rather than in production.

use chrono::{Datelike, Timelike};
use openf1::{Driver, Gap, Interval, Lap, Session, Weather};

#[test]
fn drivers_fixture_validates_in_order() {
    let drivers: Vec<Driver> =
        serde_json::from_str(include_str!("fixtures/drivers.json")).unwrap();

    assert_eq!(drivers.len(), 3);
    assert_eq!(drivers[0].driver_number, Some(1));
    assert_eq!(drivers[1].driver_number, Some(11));
    assert_eq!(drivers[2].driver_number, Some(16));
    assert_eq!(drivers[2].team_name.as_deref(), Some("Ferrari"));
    assert!(drivers[1].headshot_url.is_none());
}

#[test]
fn laps_fixture_handles_nulled_telemetry() {
    let laps: Vec<Lap> = serde_json::from_str(include_str!("fixtures/laps.json")).unwrap();

    assert_eq!(laps.len(), 2);

    let complete = &laps[0];
    assert_eq!(complete.lap_number, Some(8));
    let total = complete.total_sector_time().unwrap();
    assert!((total - 91.743).abs() < 1e-9);
    assert_eq!(
        complete.lap_time(),
        Some(std::time::Duration::from_secs_f64(91.743))
    );

    // Pit-out lap: first sector and lap duration are null upstream.
    let pit_out = &laps[1];
    assert_eq!(pit_out.is_pit_out_lap, Some(true));
    assert!(pit_out.total_sector_time().is_none());
    assert!(pit_out.lap_time().is_none());
    assert_eq!(
        pit_out.segments_sector_1.as_ref().unwrap()[0],
        None
    );
}

#[test]
fn sessions_fixture_parses_offset_timestamps() {
    let sessions: Vec<Session> =
        serde_json::from_str(include_str!("fixtures/sessions.json")).unwrap();

    let qualifying = &sessions[0];
    assert_eq!(qualifying.session_name.as_deref(), Some("Qualifying"));
    let start = qualifying.date_start.unwrap();
    assert_eq!((start.year(), start.month(), start.day()), (2023, 9, 16));
    assert_eq!(start.hour(), 13);
    assert!(qualifying.date_end.unwrap() > start);
}

#[test]
fn intervals_fixture_covers_all_gap_shapes() {
    let intervals: Vec<Interval> =
        serde_json::from_str(include_str!("fixtures/intervals.json")).unwrap();

    assert_eq!(intervals[0].gap_to_leader, Some(Gap::Seconds(41.019)));
    assert_eq!(intervals[1].gap_to_leader, Some(Gap::Text("+1 LAP".to_string())));
    assert!(intervals[2].gap_to_leader.is_none());
}

#[test]
fn weather_fixture_validates() {
    let weather: Vec<Weather> =
        serde_json::from_str(include_str!("fixtures/weather.json")).unwrap();

    assert_eq!(weather.len(), 2);
    assert_eq!(weather[0].air_temperature, Some(27.8));
    assert_eq!(weather[0].rainfall, Some(0));
    assert_eq!(weather[1].rainfall, Some(1));
    assert!(weather[1].date.unwrap() > weather[0].date.unwrap());
}
