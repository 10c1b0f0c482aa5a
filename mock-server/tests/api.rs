use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, request_log};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

const RESOURCE_PATHS: [&str; 18] = [
    "/v1/car_data",
    "/v1/championship_drivers",
    "/v1/championship_teams",
    "/v1/drivers",
    "/v1/intervals",
    "/v1/laps",
    "/v1/location",
    "/v1/meetings",
    "/v1/overtakes",
    "/v1/pit",
    "/v1/position",
    "/v1/race_control",
    "/v1/sessions",
    "/v1/session_result",
    "/v1/starting_grid",
    "/v1/stints",
    "/v1/team_radio",
    "/v1/weather",
];

#[tokio::test]
async fn every_resource_path_serves_a_nonempty_array() {
    for path in RESOURCE_PATHS {
        let app = app(request_log());
        let resp = app.oneshot(get_request(path)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{path}");
        let body = body_json(resp).await;
        let array = body.as_array().unwrap_or_else(|| panic!("{path}: not an array"));
        assert!(!array.is_empty(), "{path}: empty fixture");
    }
}

#[tokio::test]
async fn drivers_fixture_shape() {
    let app = app(request_log());
    let resp = app.oneshot(get_request("/v1/drivers")).await.unwrap();
    let body = body_json(resp).await;

    assert_eq!(body[0]["driver_number"], 1);
    assert_eq!(body[0]["name_acronym"], "VER");
    assert_eq!(body[1]["driver_number"], 44);
    assert_eq!(body[1]["team_name"], "Mercedes");
}

#[tokio::test]
async fn intervals_fixture_mixes_numeric_and_text_gaps() {
    let app = app(request_log());
    let resp = app.oneshot(get_request("/v1/intervals")).await.unwrap();
    let body = body_json(resp).await;

    assert!(body[0]["gap_to_leader"].is_number());
    assert_eq!(body[1]["gap_to_leader"], "+1 LAP");
}

#[tokio::test]
async fn unmatched_path_returns_404() {
    let app = app(request_log());
    let resp = app.oneshot(get_request("/nope/drivers")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(std::str::from_utf8(&bytes).unwrap(), "Not Found");
}

#[tokio::test]
async fn broken_laps_returns_schema_violating_payload() {
    let app = app(request_log());
    let resp = app.oneshot(get_request("/broken/v1/laps")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body[1]["lap_number"].is_string());
}

#[tokio::test]
async fn requests_are_recorded_with_path_and_query() {
    let log = request_log();
    let app = app(log.clone());
    app.oneshot(get_request("/v1/laps?session_key=9161&lap_number%3E%3D=5"))
        .await
        .unwrap();

    let entries = log.lock().unwrap().clone();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, "/v1/laps");
    assert_eq!(entries[0].query, "session_key=9161&lap_number%3E%3D=5");
}

#[tokio::test]
async fn unmatched_requests_are_recorded_too() {
    let log = request_log();
    let app = app(log.clone());
    app.oneshot(get_request("/nope/drivers?session_key=1"))
        .await
        .unwrap();

    let entries = log.lock().unwrap().clone();
    assert_eq!(entries[0].path, "/nope/drivers");
    assert_eq!(entries[0].query, "session_key=1");
}
