use axum::{extract::State, Json};

use crate::api::state::AppState;
use crate::error::Result;
use crate::services::PlatformStats;

/// GET /v1/stats
///
/// Always computed over the full, unfiltered prediction set.
pub async fn get_platform_stats(State(state): State<AppState>) -> Result<Json<PlatformStats>> {
    let predictions = state.source.predictions().await?;
    Ok(Json(PlatformStats::compute(&predictions)))
}
