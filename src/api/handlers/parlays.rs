use axum::{extract::State, Json};

use crate::api::state::AppState;
use crate::domain::{DailyParlays, ParlaySport, SixParlay};
use crate::error::Result;

/// GET /v1/parlays/nfl
pub async fn get_nfl_parlays(State(state): State<AppState>) -> Result<Json<Vec<SixParlay>>> {
    Ok(Json(state.source.parlays(ParlaySport::Nfl).await?))
}

/// GET /v1/parlays/nba
pub async fn get_nba_parlays(State(state): State<AppState>) -> Result<Json<Vec<SixParlay>>> {
    Ok(Json(state.source.parlays(ParlaySport::Nba).await?))
}

/// GET /v1/parlays/daily
pub async fn get_daily_parlays(State(state): State<AppState>) -> Result<Json<DailyParlays>> {
    Ok(Json(state.source.daily_parlays().await?))
}
