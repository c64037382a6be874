use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Game lifecycle status; the published slate only carries upcoming games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
}

/// A scheduled game that props are posted against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub sport: String,
    pub home_team: String,
    pub away_team: String,
    pub start_time_utc: DateTime<Utc>,
    pub venue: String,
    pub status: EventStatus,
}
