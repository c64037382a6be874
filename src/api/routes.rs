use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{handlers, state::AppState, websocket::props_feed_handler};

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Service endpoints
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/v1/time", get(handlers::get_server_time))
        // Prediction endpoints
        .route("/v1/predictions/today", get(handlers::get_today_predictions))
        .route("/v1/predictions/:prediction_id", get(handlers::get_prediction))
        .route("/v1/props/live", get(handlers::get_live_props))
        .route("/v1/events", get(handlers::get_events))
        // Parlay endpoints
        .route("/v1/parlays/nfl", get(handlers::get_nfl_parlays))
        .route("/v1/parlays/nba", get(handlers::get_nba_parlays))
        .route("/v1/parlays/daily", get(handlers::get_daily_parlays))
        // Stats endpoints
        .route("/v1/stats", get(handlers::get_platform_stats))
        // WebSocket endpoint
        .route("/ws/props", get(props_feed_handler))
        // Add state, CORS and request tracing
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
