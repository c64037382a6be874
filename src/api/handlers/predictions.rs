use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use tracing::debug;

use crate::api::{state::AppState, types::*};
use crate::domain::{Prediction, Prop};
use crate::error::{ButcherError, Result};
use crate::services::{project_props, PredictionFilter};

/// GET /v1/predictions/today?sport=nba&confidence=demolition&min_edge=0.2
pub async fn get_today_predictions(
    State(state): State<AppState>,
    query: std::result::Result<Query<PredictionQuery>, QueryRejection>,
) -> Result<Json<Vec<Prediction>>> {
    let Query(params) = query.map_err(|e| ButcherError::Validation(e.body_text()))?;

    let filter = PredictionFilter::from_params(
        params.sport.as_deref(),
        params.confidence.as_deref(),
        params.min_edge,
    );

    let predictions = state.source.predictions().await?;
    let result = filter.apply(&predictions);
    debug!(?filter, matched = result.len(), total = predictions.len(), "filtered predictions");

    Ok(Json(result))
}

/// GET /v1/predictions/:prediction_id
pub async fn get_prediction(
    State(state): State<AppState>,
    Path(prediction_id): Path<String>,
) -> Result<Json<Prediction>> {
    state
        .source
        .prediction(&prediction_id)
        .await?
        .map(Json)
        .ok_or_else(|| ButcherError::NotFound("Prediction not found".to_string()))
}

/// GET /v1/props/live
pub async fn get_live_props(State(state): State<AppState>) -> Result<Json<Vec<Prop>>> {
    let predictions = state.source.predictions().await?;
    Ok(Json(project_props(&predictions)))
}

/// GET /v1/events
pub async fn get_events(State(state): State<AppState>) -> Result<Json<EventsResponse>> {
    let events = state.source.events().await?;
    Ok(Json(EventsResponse { events }))
}
