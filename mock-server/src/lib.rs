//! Mock OpenF1 server for client tests.
//!
//! Serves canned JSON for every resource path under `/v1`, mirroring the
//! shapes the live API returns for the 2023 Bahrain Grand Prix race session
//! (session_key 9161, meeting_key 1219). Every incoming request is appended
//! to a shared [`RequestLog`] so tests can assert on the exact path and raw
//! query string the client sent.
//!
//! Failure scenarios get dedicated base paths a client can be pointed at:
//! `/slow/v1` delays past any reasonable test timeout and `/broken/v1`
//! returns payloads that violate the record schemas. Unmatched paths return
//! 404 with a plain-text body.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// One request as seen by the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub query: String,
}

/// Shared log of every request the server has handled, in arrival order.
pub type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

pub fn request_log() -> RequestLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn app(log: RequestLog) -> Router {
    Router::new()
        .route("/v1/car_data", get(car_data))
        .route("/v1/championship_drivers", get(championship_drivers))
        .route("/v1/championship_teams", get(championship_teams))
        .route("/v1/drivers", get(drivers))
        .route("/v1/intervals", get(intervals))
        .route("/v1/laps", get(laps))
        .route("/v1/location", get(location))
        .route("/v1/meetings", get(meetings))
        .route("/v1/overtakes", get(overtakes))
        .route("/v1/pit", get(pit))
        .route("/v1/position", get(position))
        .route("/v1/race_control", get(race_control))
        .route("/v1/sessions", get(sessions))
        .route("/v1/session_result", get(session_result))
        .route("/v1/starting_grid", get(starting_grid))
        .route("/v1/stints", get(stints))
        .route("/v1/team_radio", get(team_radio))
        .route("/v1/weather", get(weather))
        .route("/slow/v1/laps", get(slow_laps))
        .route("/broken/v1/laps", get(broken_laps))
        .route("/broken/v1/drivers", get(drivers))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(log, record))
}

pub async fn run(listener: TcpListener, log: RequestLog) -> Result<(), std::io::Error> {
    axum::serve(listener, app(log)).await
}

async fn record(State(log): State<RequestLog>, request: Request, next: Next) -> Response {
    let uri = request.uri();
    log.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().unwrap_or_default().to_string(),
    });
    next.run(request).await
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Delays longer than any timeout the tests configure.
async fn slow_laps() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!([]))
}

/// Second element carries a string where the schema expects a number.
async fn broken_laps() -> Json<Value> {
    Json(json!([
        {"driver_number": 1, "lap_number": 1, "session_key": 9161},
        {"driver_number": 1, "lap_number": "two", "session_key": 9161}
    ]))
}

async fn car_data() -> Json<Value> {
    Json(json!([
        {
            "brake": 0,
            "date": "2023-03-05T15:10:00.100000+00:00",
            "driver_number": 1,
            "drs": 12,
            "meeting_key": 1219,
            "n_gear": 7,
            "rpm": 10500,
            "session_key": 9161,
            "speed": 305,
            "throttle": 100
        }
    ]))
}

async fn championship_drivers() -> Json<Value> {
    Json(json!([
        {
            "broadcast_name": "M VERSTAPPEN",
            "driver_number": 1,
            "first_name": "Max",
            "full_name": "Max VERSTAPPEN",
            "last_name": "Verstappen",
            "meeting_key": 1219,
            "points": 25.0,
            "position": 1,
            "session_key": 9161,
            "team_name": "Red Bull Racing"
        }
    ]))
}

async fn championship_teams() -> Json<Value> {
    Json(json!([
        {
            "meeting_key": 1219,
            "points": 43.0,
            "position": 1,
            "session_key": 9161,
            "team_name": "Red Bull Racing"
        }
    ]))
}

async fn drivers() -> Json<Value> {
    Json(json!([
        {
            "broadcast_name": "M VERSTAPPEN",
            "country_code": "NED",
            "driver_number": 1,
            "first_name": "Max",
            "full_name": "Max VERSTAPPEN",
            "headshot_url": "https://example.com/ver.png",
            "last_name": "Verstappen",
            "meeting_key": 1219,
            "name_acronym": "VER",
            "session_key": 9161,
            "team_colour": "3671C6",
            "team_name": "Red Bull Racing"
        },
        {
            "broadcast_name": "L HAMILTON",
            "country_code": "GBR",
            "driver_number": 44,
            "first_name": "Lewis",
            "full_name": "Lewis HAMILTON",
            "headshot_url": "https://example.com/ham.png",
            "last_name": "Hamilton",
            "meeting_key": 1219,
            "name_acronym": "HAM",
            "session_key": 9161,
            "team_colour": "6CD3BF",
            "team_name": "Mercedes"
        }
    ]))
}

async fn intervals() -> Json<Value> {
    Json(json!([
        {
            "date": "2023-03-05T15:30:00+00:00",
            "driver_number": 44,
            "gap_to_leader": 12.338,
            "interval": 0.798,
            "meeting_key": 1219,
            "session_key": 9161
        },
        {
            "date": "2023-03-05T15:30:00+00:00",
            "driver_number": 23,
            "gap_to_leader": "+1 LAP",
            "interval": "+1 LAP",
            "meeting_key": 1219,
            "session_key": 9161
        }
    ]))
}

async fn laps() -> Json<Value> {
    Json(json!([
        {
            "date_start": "2023-03-05T15:10:00+00:00",
            "driver_number": 1,
            "duration_sector_1": 28.5,
            "duration_sector_2": 35.2,
            "duration_sector_3": 30.1,
            "i1_speed": 305.0,
            "i2_speed": 280.0,
            "is_pit_out_lap": false,
            "lap_duration": 93.8,
            "lap_number": 5,
            "meeting_key": 1219,
            "segments_sector_1": [2048, 2049, 2051],
            "segments_sector_2": [2048, 2049],
            "segments_sector_3": [2048, 2049, 2050],
            "session_key": 9161,
            "st_speed": 310.0
        },
        {
            "date_start": "2023-03-05T15:11:34+00:00",
            "driver_number": 1,
            "duration_sector_1": 28.3,
            "duration_sector_2": 35.0,
            "duration_sector_3": 29.9,
            "i1_speed": 307.0,
            "i2_speed": 282.0,
            "is_pit_out_lap": false,
            "lap_duration": 93.2,
            "lap_number": 6,
            "meeting_key": 1219,
            "segments_sector_1": [2049, 2049, 2051],
            "segments_sector_2": [2048, 2051],
            "segments_sector_3": [2048, 2049, 2048],
            "session_key": 9161,
            "st_speed": 312.0
        }
    ]))
}

async fn location() -> Json<Value> {
    Json(json!([
        {
            "date": "2023-03-05T15:10:00.100000+00:00",
            "driver_number": 1,
            "meeting_key": 1219,
            "session_key": 9161,
            "x": 567.0,
            "y": 3195.0,
            "z": 187.0
        }
    ]))
}

async fn meetings() -> Json<Value> {
    Json(json!([
        {
            "circuit_key": 61,
            "circuit_short_name": "Bahrain",
            "country_code": "BHR",
            "country_key": 36,
            "country_name": "Bahrain",
            "date_start": "2023-03-03T11:30:00+00:00",
            "gmt_offset": "03:00:00",
            "location": "Sakhir",
            "meeting_key": 1219,
            "meeting_name": "Bahrain Grand Prix",
            "meeting_official_name": "FORMULA 1 GULF AIR BAHRAIN GRAND PRIX 2023",
            "year": 2023
        }
    ]))
}

async fn overtakes() -> Json<Value> {
    Json(json!([
        {
            "date": "2023-03-05T15:20:51+00:00",
            "driver_number": 44,
            "lap_number": 8,
            "meeting_key": 1219,
            "overtaking_driver_number": 14,
            "position": 5,
            "session_key": 9161
        }
    ]))
}

async fn pit() -> Json<Value> {
    Json(json!([
        {
            "date": "2023-03-05T15:30:00+00:00",
            "driver_number": 1,
            "lap_number": 15,
            "meeting_key": 1219,
            "pit_duration": 23.5,
            "session_key": 9161
        }
    ]))
}

async fn position() -> Json<Value> {
    Json(json!([
        {
            "date": "2023-03-05T15:00:00+00:00",
            "driver_number": 1,
            "meeting_key": 1219,
            "position": 1,
            "session_key": 9161
        }
    ]))
}

async fn race_control() -> Json<Value> {
    Json(json!([
        {
            "category": "Flag",
            "date": "2023-03-05T15:00:00+00:00",
            "driver_number": null,
            "flag": "GREEN",
            "lap_number": 1,
            "meeting_key": 1219,
            "message": "GREEN LIGHT - PIT EXIT OPEN",
            "scope": "Track",
            "sector": null,
            "session_key": 9161
        }
    ]))
}

async fn sessions() -> Json<Value> {
    Json(json!([
        {
            "circuit_key": 61,
            "circuit_short_name": "Bahrain",
            "country_code": "BHR",
            "country_key": 36,
            "country_name": "Bahrain",
            "date_end": "2023-03-05T17:02:48+00:00",
            "date_start": "2023-03-05T15:00:00+00:00",
            "gmt_offset": "03:00:00",
            "location": "Sakhir",
            "meeting_key": 1219,
            "session_key": 9161,
            "session_name": "Race",
            "session_type": "Race",
            "year": 2023
        }
    ]))
}

async fn session_result() -> Json<Value> {
    Json(json!([
        {
            "broadcast_name": "M VERSTAPPEN",
            "driver_number": 1,
            "first_name": "Max",
            "full_name": "Max VERSTAPPEN",
            "gap_to_leader": null,
            "last_name": "Verstappen",
            "laps_completed": 57,
            "meeting_key": 1219,
            "name_acronym": "VER",
            "position": 1,
            "session_key": 9161,
            "status": "Finished",
            "team_name": "Red Bull Racing"
        },
        {
            "broadcast_name": "L HAMILTON",
            "driver_number": 44,
            "first_name": "Lewis",
            "full_name": "Lewis HAMILTON",
            "gap_to_leader": 50.977,
            "last_name": "Hamilton",
            "laps_completed": 57,
            "meeting_key": 1219,
            "name_acronym": "HAM",
            "position": 5,
            "session_key": 9161,
            "status": "Finished",
            "team_name": "Mercedes"
        }
    ]))
}

async fn starting_grid() -> Json<Value> {
    Json(json!([
        {
            "broadcast_name": "M VERSTAPPEN",
            "driver_number": 1,
            "first_name": "Max",
            "full_name": "Max VERSTAPPEN",
            "last_name": "Verstappen",
            "meeting_key": 1219,
            "name_acronym": "VER",
            "position": 1,
            "qualifying_time": "1:29.708",
            "session_key": 9161,
            "team_name": "Red Bull Racing"
        }
    ]))
}

async fn stints() -> Json<Value> {
    Json(json!([
        {
            "compound": "SOFT",
            "driver_number": 1,
            "lap_end": 14,
            "lap_start": 1,
            "meeting_key": 1219,
            "session_key": 9161,
            "stint_number": 1,
            "tyre_age_at_start": 0
        },
        {
            "compound": "HARD",
            "driver_number": 1,
            "lap_end": 36,
            "lap_start": 15,
            "meeting_key": 1219,
            "session_key": 9161,
            "stint_number": 2,
            "tyre_age_at_start": 2
        }
    ]))
}

async fn team_radio() -> Json<Value> {
    Json(json!([
        {
            "date": "2023-03-05T16:40:00+00:00",
            "driver_number": 1,
            "meeting_key": 1219,
            "recording_url": "https://example.com/radio/ver_01.mp3",
            "session_key": 9161
        }
    ]))
}

async fn weather() -> Json<Value> {
    Json(json!([
        {
            "air_temperature": 30.5,
            "date": "2023-03-05T15:00:00+00:00",
            "humidity": 45.0,
            "meeting_key": 1219,
            "pressure": 1013.0,
            "rainfall": 0,
            "session_key": 9161,
            "track_temperature": 45.2,
            "wind_direction": 180,
            "wind_speed": 3.5
        }
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_log_records_in_order() {
        let log = request_log();
        log.lock().unwrap().push(RecordedRequest {
            path: "/v1/laps".to_string(),
            query: "session_key=9161".to_string(),
        });
        log.lock().unwrap().push(RecordedRequest {
            path: "/v1/drivers".to_string(),
            query: String::new(),
        });
        let entries = log.lock().unwrap().clone();
        assert_eq!(entries[0].path, "/v1/laps");
        assert_eq!(entries[1].query, "");
    }

    #[tokio::test]
    async fn broken_laps_second_element_has_wrong_type() {
        let Json(body) = broken_laps().await;
        assert!(body[0]["lap_number"].is_number());
        assert!(body[1]["lap_number"].is_string());
    }
}
