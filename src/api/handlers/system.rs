use axum::{extract::State, Json};
use chrono::Utc;

use crate::api::{state::AppState, types::*};

const FEATURES: [&str; 4] = [
    "Real-time slaughter predictions",
    "WebSocket live updates",
    "Mathematical edge analysis",
    "Sport-specific terminology",
];

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("🥩 {SERVICE_NAME}"),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "Professional Sports Analytics Platform".to_string(),
    })
}

/// GET /v1/time
pub async fn get_server_time() -> Json<TimeResponse> {
    Json(TimeResponse {
        server_utc: Utc::now(),
        server_timezone: "UTC".to_string(),
    })
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: Utc::now(),
        features: FEATURES.iter().map(|f| f.to_string()).collect(),
        uptime_seconds: state.uptime_seconds(),
        connected_clients: state.registry.len(),
    })
}
