use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Event;

pub const SERVICE_NAME: &str = "The Bookie Butcher API";

// ============================================================================
// Service Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeResponse {
    pub server_utc: DateTime<Utc>,
    pub server_timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    pub features: Vec<String>,
    pub uptime_seconds: i64,
    pub connected_clients: usize,
}

// ============================================================================
// Prediction Types
// ============================================================================

/// Query string for GET /v1/predictions/today
#[derive(Debug, Default, Deserialize)]
pub struct PredictionQuery {
    pub sport: Option<String>,
    pub confidence: Option<String>,
    pub min_edge: Option<f64>,
}

// ============================================================================
// Event Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}
