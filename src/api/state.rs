use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::adapters::SampleDataStore;
use crate::config::RealtimeConfig;
use crate::domain::PredictionSource;
use crate::realtime::ConnectionRegistry;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only prediction/parlay provider
    pub source: Arc<dyn PredictionSource>,

    /// Live `/ws/props` sessions
    pub registry: Arc<ConnectionRegistry>,

    /// Realtime feed settings (per-client buffer size)
    pub realtime: RealtimeConfig,

    /// Application start time
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        source: Arc<dyn PredictionSource>,
        registry: Arc<ConnectionRegistry>,
        realtime: RealtimeConfig,
    ) -> Self {
        Self {
            source,
            registry,
            realtime,
            start_time: Utc::now(),
        }
    }

    /// State over the seeded sample data with a fresh registry
    pub fn with_sample_data() -> Self {
        Self::new(
            Arc::new(SampleDataStore::new()),
            Arc::new(ConnectionRegistry::new()),
            RealtimeConfig::default(),
        )
    }

    /// Get system uptime in seconds
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.start_time).num_seconds()
    }
}
