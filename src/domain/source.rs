use async_trait::async_trait;

use super::{DailyParlays, Event, ParlaySport, Prediction, SixParlay};
use crate::error::Result;

/// Read-only provider of predictions, events, and parlays
///
/// Route handlers and the live feed only read through this trait, so an
/// ingestion-backed store can replace the seeded sample data.
#[async_trait]
pub trait PredictionSource: Send + Sync {
    /// Human-readable name for logs
    fn name(&self) -> &str;

    /// Every current prediction, in publication order
    async fn predictions(&self) -> Result<Vec<Prediction>>;

    /// Look up one prediction by id
    async fn prediction(&self, prediction_id: &str) -> Result<Option<Prediction>>;

    async fn events(&self) -> Result<Vec<Event>>;

    async fn parlays(&self, sport: ParlaySport) -> Result<Vec<SixParlay>>;

    async fn daily_parlays(&self) -> Result<DailyParlays>;
}
