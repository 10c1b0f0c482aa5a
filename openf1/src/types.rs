//! Resource records for the OpenF1 API.
//!
//! # Design
//! One struct per upstream resource, fields mirroring the upstream JSON
//! object. Every field is optional: the API omits or nulls fields freely
//! depending on session type and data availability. Unknown extra fields are
//! ignored on deserialization, so new upstream fields do not break existing
//! consumers, while a wrong type on a known field rejects the element.
//!
//! Records carry no mutation API. They are built by deserialization and read
//! by the caller; nothing in this crate writes to them afterwards.
//!
//! Upstream timestamps arrive either as RFC 3339 with an offset
//! (`2023-09-16T13:30:00+00:00`) or naive (`2023-03-05T15:00:00`). The
//! `opt_datetime` serde helper accepts both and interprets naive values
//! as UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serde helper for optional upstream timestamps, with or without an offset.
pub(crate) mod opt_datetime {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value {
            None => Ok(None),
            Some(s) => parse(&s).map(Some).map_err(serde::de::Error::custom),
        }
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            None => serializer.serialize_none(),
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
        }
    }

    fn parse(s: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }
        // Naive timestamps are UTC upstream, they just lack the offset.
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|e| format!("invalid timestamp `{s}`: {e}"))
    }
}

/// A gap to another car: either seconds or text such as `"+1 LAP"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gap {
    Seconds(f64),
    Text(String),
}

impl Gap {
    /// The gap in seconds, or `None` for textual gaps like `"+1 LAP"`.
    pub fn seconds(&self) -> Option<f64> {
        match self {
            Gap::Seconds(s) => Some(*s),
            Gap::Text(_) => None,
        }
    }
}

/// Vehicle telemetry snapshot (speed, throttle, brake, RPM, gear, DRS),
/// sampled at roughly 3.7 Hz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarData {
    pub brake: Option<u32>,
    #[serde(default, with = "opt_datetime")]
    pub date: Option<DateTime<Utc>>,
    pub driver_number: Option<u32>,
    pub drs: Option<u32>,
    pub meeting_key: Option<u32>,
    pub n_gear: Option<u32>,
    pub rpm: Option<u32>,
    pub session_key: Option<u32>,
    pub speed: Option<u32>,
    pub throttle: Option<u32>,
}

/// Driver championship standing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionshipDriver {
    pub broadcast_name: Option<String>,
    pub driver_number: Option<u32>,
    pub first_name: Option<String>,
    pub full_name: Option<String>,
    pub last_name: Option<String>,
    pub meeting_key: Option<u32>,
    pub points: Option<f64>,
    pub position: Option<u32>,
    pub session_key: Option<u32>,
    pub team_name: Option<String>,
}

/// Team championship standing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionshipTeam {
    pub meeting_key: Option<u32>,
    pub points: Option<f64>,
    pub position: Option<u32>,
    pub session_key: Option<u32>,
    pub team_name: Option<String>,
}

/// Driver info for a specific session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub broadcast_name: Option<String>,
    pub country_code: Option<String>,
    pub driver_number: Option<u32>,
    pub first_name: Option<String>,
    pub full_name: Option<String>,
    pub headshot_url: Option<String>,
    pub last_name: Option<String>,
    pub meeting_key: Option<u32>,
    pub name_acronym: Option<String>,
    pub session_key: Option<u32>,
    pub team_colour: Option<String>,
    pub team_name: Option<String>,
}

/// Real-time gap between drivers, updated about every four seconds during
/// races.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(default, with = "opt_datetime")]
    pub date: Option<DateTime<Utc>>,
    pub driver_number: Option<u32>,
    pub gap_to_leader: Option<Gap>,
    pub interval: Option<Gap>,
    pub meeting_key: Option<u32>,
    pub session_key: Option<u32>,
}

/// Individual lap data with sector times and speed-trap readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    #[serde(default, with = "opt_datetime")]
    pub date_start: Option<DateTime<Utc>>,
    pub driver_number: Option<u32>,
    pub duration_sector_1: Option<f64>,
    pub duration_sector_2: Option<f64>,
    pub duration_sector_3: Option<f64>,
    pub i1_speed: Option<f64>,
    pub i2_speed: Option<f64>,
    pub is_pit_out_lap: Option<bool>,
    pub lap_duration: Option<f64>,
    pub lap_number: Option<u32>,
    pub meeting_key: Option<u32>,
    pub segments_sector_1: Option<Vec<Option<u32>>>,
    pub segments_sector_2: Option<Vec<Option<u32>>>,
    pub segments_sector_3: Option<Vec<Option<u32>>>,
    pub session_key: Option<u32>,
    pub st_speed: Option<f64>,
}

impl Lap {
    /// Sum of all three sector durations, or `None` if any is missing.
    pub fn total_sector_time(&self) -> Option<f64> {
        Some(self.duration_sector_1? + self.duration_sector_2? + self.duration_sector_3?)
    }

    /// Lap duration as a `std::time::Duration`, or `None` if missing.
    pub fn lap_time(&self) -> Option<std::time::Duration> {
        std::time::Duration::try_from_secs_f64(self.lap_duration?).ok()
    }
}

/// 3D position of a car on track (~3.7 Hz).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, with = "opt_datetime")]
    pub date: Option<DateTime<Utc>>,
    pub driver_number: Option<u32>,
    pub meeting_key: Option<u32>,
    pub session_key: Option<u32>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

/// Grand Prix weekend or test event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub circuit_key: Option<u32>,
    pub circuit_short_name: Option<String>,
    pub country_code: Option<String>,
    pub country_key: Option<u32>,
    pub country_name: Option<String>,
    #[serde(default, with = "opt_datetime")]
    pub date_start: Option<DateTime<Utc>>,
    pub gmt_offset: Option<String>,
    pub location: Option<String>,
    pub meeting_key: Option<u32>,
    pub meeting_name: Option<String>,
    pub meeting_official_name: Option<String>,
    pub year: Option<u32>,
}

/// Position change event during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overtake {
    #[serde(default, with = "opt_datetime")]
    pub date: Option<DateTime<Utc>>,
    pub driver_number: Option<u32>,
    pub lap_number: Option<u32>,
    pub meeting_key: Option<u32>,
    pub overtaking_driver_number: Option<u32>,
    pub position: Option<u32>,
    pub session_key: Option<u32>,
}

/// Pit stop information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pit {
    #[serde(default, with = "opt_datetime")]
    pub date: Option<DateTime<Utc>>,
    pub driver_number: Option<u32>,
    pub lap_number: Option<u32>,
    pub meeting_key: Option<u32>,
    pub pit_duration: Option<f64>,
    pub session_key: Option<u32>,
}

/// Driver position change during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, with = "opt_datetime")]
    pub date: Option<DateTime<Utc>>,
    pub driver_number: Option<u32>,
    pub meeting_key: Option<u32>,
    pub position: Option<u32>,
    pub session_key: Option<u32>,
}

/// Race control message (flags, safety cars, incidents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceControl {
    pub category: Option<String>,
    #[serde(default, with = "opt_datetime")]
    pub date: Option<DateTime<Utc>>,
    pub driver_number: Option<u32>,
    pub flag: Option<String>,
    pub lap_number: Option<u32>,
    pub meeting_key: Option<u32>,
    pub message: Option<String>,
    pub scope: Option<String>,
    pub sector: Option<u32>,
    pub session_key: Option<u32>,
}

/// F1 session (practice, qualifying, sprint, race).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub circuit_key: Option<u32>,
    pub circuit_short_name: Option<String>,
    pub country_code: Option<String>,
    pub country_key: Option<u32>,
    pub country_name: Option<String>,
    #[serde(default, with = "opt_datetime")]
    pub date_end: Option<DateTime<Utc>>,
    #[serde(default, with = "opt_datetime")]
    pub date_start: Option<DateTime<Utc>>,
    pub gmt_offset: Option<String>,
    pub location: Option<String>,
    pub meeting_key: Option<u32>,
    pub session_key: Option<u32>,
    pub session_name: Option<String>,
    pub session_type: Option<String>,
    pub year: Option<u32>,
}

/// Final standing after a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub broadcast_name: Option<String>,
    pub driver_number: Option<u32>,
    pub first_name: Option<String>,
    pub full_name: Option<String>,
    pub gap_to_leader: Option<Gap>,
    pub last_name: Option<String>,
    pub laps_completed: Option<u32>,
    pub meeting_key: Option<u32>,
    pub name_acronym: Option<String>,
    pub position: Option<u32>,
    pub session_key: Option<u32>,
    pub status: Option<String>,
    pub team_name: Option<String>,
}

/// Race starting grid position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartingGrid {
    pub broadcast_name: Option<String>,
    pub driver_number: Option<u32>,
    pub first_name: Option<String>,
    pub full_name: Option<String>,
    pub last_name: Option<String>,
    pub meeting_key: Option<u32>,
    pub name_acronym: Option<String>,
    pub position: Option<u32>,
    pub qualifying_time: Option<String>,
    pub session_key: Option<u32>,
    pub team_name: Option<String>,
}

/// Continuous driving stint on one set of tires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stint {
    pub compound: Option<String>,
    pub driver_number: Option<u32>,
    pub lap_end: Option<u32>,
    pub lap_start: Option<u32>,
    pub meeting_key: Option<u32>,
    pub session_key: Option<u32>,
    pub stint_number: Option<u32>,
    pub tyre_age_at_start: Option<u32>,
}

/// Driver-team radio communication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRadio {
    #[serde(default, with = "opt_datetime")]
    pub date: Option<DateTime<Utc>>,
    pub driver_number: Option<u32>,
    pub meeting_key: Option<u32>,
    pub recording_url: Option<String>,
    pub session_key: Option<u32>,
}

/// Track weather conditions, updated about once per minute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub air_temperature: Option<f64>,
    #[serde(default, with = "opt_datetime")]
    pub date: Option<DateTime<Utc>>,
    pub humidity: Option<f64>,
    pub meeting_key: Option<u32>,
    pub pressure: Option<f64>,
    pub rainfall: Option<u32>,
    pub session_key: Option<u32>,
    pub track_temperature: Option<f64>,
    pub wind_direction: Option<u32>,
    pub wind_speed: Option<f64>,
}
