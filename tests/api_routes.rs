use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use butcher::api::{create_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    create_router(AppState::with_sample_data())
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("origin", "https://dashboard.example")
        .body(Body::empty())
        .expect("failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri).await
}

fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|p| p["prediction_id"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn root_banner_reports_version() {
    let (status, body) = get(&app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["message"].as_str().unwrap().contains("Bookie Butcher"));
}

#[tokio::test]
async fn server_time_is_utc() {
    let (status, body) = get(&app(), "/v1/time").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["server_timezone"], "UTC");
    let server_utc = body["server_utc"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(server_utc).is_ok());
}

#[tokio::test]
async fn today_predictions_unfiltered() {
    let (status, body) = get(&app(), "/v1/predictions/today").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["bb-001", "bb-002", "bb-003", "bb-004", "bb-005"]);
    assert_eq!(body[0]["confidence_level"], "EXECUTION");
    assert_eq!(body[0]["recommendation"], "OVER");
    assert_eq!(body[0]["posted_at"], "2025-10-31T13:20:00Z");
}

#[tokio::test]
async fn today_predictions_sport_and_confidence() {
    let (status, body) = get(&app(), "/v1/predictions/today?sport=nba&confidence=demolition").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["bb-003"]);
    assert_eq!(body[0]["player_name"], "Victor Wembanyama");
}

#[tokio::test]
async fn today_predictions_ignores_non_lowercase_confidence() {
    let (status, body) = get(&app(), "/v1/predictions/today?confidence=EXECUTION").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body).len(), 5);

    let (_, body) = get(&app(), "/v1/predictions/today?confidence=execution").await;
    assert_eq!(ids(&body), vec!["bb-001"]);
}

#[tokio::test]
async fn today_predictions_min_edge_and_sport_all() {
    let (_, body) = get(&app(), "/v1/predictions/today?sport=all&min_edge=0.2").await;
    assert_eq!(ids(&body), vec!["bb-001", "bb-003"]);
}

#[tokio::test]
async fn today_predictions_rejects_malformed_min_edge() {
    let (status, body) = get(&app(), "/v1/predictions/today?min_edge=lots").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn prediction_by_id() {
    let (status, body) = get(&app(), "/v1/predictions/bb-001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction_id"], "bb-001");
    assert_eq!(body["player_name"], "LeBron James");
    assert_eq!(body["line_value"], 24.5);
}

#[tokio::test]
async fn unknown_prediction_is_404() {
    let (status, body) = get(&app(), "/v1/predictions/bb-999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Prediction not found");
}

#[tokio::test]
async fn live_props_mirror_predictions() {
    let app = app();
    let (_, predictions) = get(&app, "/v1/predictions/today").await;
    let (status, props) = get(&app, "/v1/props/live").await;
    assert_eq!(status, StatusCode::OK);

    let predictions = predictions.as_array().unwrap();
    let props = props.as_array().unwrap();
    assert_eq!(props.len(), predictions.len());
    for (prop, prediction) in props.iter().zip(predictions) {
        assert_eq!(prop["prop_id"], prediction["prediction_id"]);
        assert_eq!(
            prop["event_id"],
            format!("event-{}", prediction["prediction_id"].as_str().unwrap())
        );
        for field in [
            "player_name",
            "sport",
            "stat_type",
            "line_value",
            "recommendation",
            "confidence",
            "edge_percentage",
            "posted_at",
        ] {
            assert_eq!(prop[field], prediction[field], "field {field}");
        }
        assert!(prop.get("analysis").is_none());
        assert!(prop.get("confidence_level").is_none());
    }
}

#[tokio::test]
async fn events_are_wrapped() {
    let (status, body) = get(&app(), "/v1/events").await;
    assert_eq!(status, StatusCode::OK);
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["event_id"], "nba-2025-10-31-001");
    assert_eq!(events[0]["status"], "scheduled");
    assert_eq!(events[1]["start_time_utc"], "2025-10-31T18:00:00Z");
}

#[tokio::test]
async fn parlays_per_sport_and_daily() {
    let app = app();

    let (status, nfl) = get(&app, "/v1/parlays/nfl").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(nfl[0]["id"], "nfl-parlay-1");
    assert_eq!(nfl[0]["sport"], "NFL");
    assert_eq!(nfl[0]["picks"].as_array().unwrap().len(), 2);
    assert_eq!(nfl[0]["picks"][0]["line"], "1.5");

    let (_, nba) = get(&app, "/v1/parlays/nba").await;
    assert_eq!(nba[0]["id"], "nba-parlay-1");
    assert_eq!(nba[0]["expected_profit"], 2430.0);

    let (status, daily) = get(&app, "/v1/parlays/daily").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(daily["date"], "2025-10-31");
    assert_eq!(daily["total_daily_risk"], 300.0);
    assert_eq!(daily["games_tonight"], 8);
    assert_eq!(daily["win_rate"], 92);
    assert!(daily["win_rate"].is_u64());
    assert_eq!(daily["nfl_parlays"], nfl);
    assert_eq!(daily["nba_parlays"], nba);
}

#[tokio::test]
async fn stats_cover_full_set() {
    let (status, body) = get(&app(), "/v1/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_predictions"], 5);
    assert_eq!(body["execution_level"], 1);
    assert_eq!(body["demolition_level"], 2);
    assert_eq!(body["meat_level"], 2);
    assert_eq!(body["scrap_level"], 0);

    let avg_edge = body["avg_edge"].as_f64().unwrap();
    assert!((avg_edge - 0.2).abs() < 1e-9);
    let mut sports: Vec<_> = body["sports_supported"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap().to_string())
        .collect();
    sports.sort();
    assert_eq!(sports, vec!["nba", "nfl"]);
}

#[tokio::test]
async fn health_is_fixed_payload() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["connected_clients"], 0);
    assert_eq!(body["features"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/v1/stats")
        .header("origin", "https://anywhere.example")
        .header("access-control-request-method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = get(&app(), "/v2/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
