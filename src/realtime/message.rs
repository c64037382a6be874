use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ConfidenceLevel, Prediction, Recommendation};

pub const WELCOME_MESSAGE: &str = "🥩 Butcher connected to slaughter feed";
pub const HEARTBEAT_MESSAGE: &str = "Slaughter feed active";

/// Frames pushed to `/ws/props` clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    /// Sent once after the handshake is accepted
    Connection {
        message: String,
        timestamp: DateTime<Utc>,
    },
    /// Sample prediction pushed right after the welcome frame
    CarnageUpdate {
        payload: CarnagePayload,
        timestamp: DateTime<Utc>,
    },
    Echo {
        message: String,
        timestamp: DateTime<Utc>,
    },
    Heartbeat {
        message: String,
        connected_clients: usize,
        timestamp: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarnagePayload {
    pub prediction_id: String,
    pub player: String,
    pub stat: String,
    pub line: f64,
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub analysis: String,
    pub edge: f64,
    pub level: ConfidenceLevel,
}

impl WsMessage {
    pub fn welcome() -> Self {
        WsMessage::Connection {
            message: WELCOME_MESSAGE.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn carnage_update(prediction: &Prediction) -> Self {
        WsMessage::CarnageUpdate {
            payload: CarnagePayload {
                prediction_id: prediction.prediction_id.clone(),
                player: prediction.player_name.clone(),
                stat: prediction.stat_type.clone(),
                line: prediction.line_value,
                recommendation: prediction.recommendation,
                confidence: prediction.confidence,
                analysis: prediction.analysis.clone(),
                edge: prediction.edge_percentage,
                level: prediction.confidence_level,
            },
            timestamp: Utc::now(),
        }
    }

    pub fn echo(message: impl Into<String>) -> Self {
        WsMessage::Echo {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn heartbeat(connected_clients: usize) -> Self {
        WsMessage::Heartbeat {
            message: HEARTBEAT_MESSAGE.to_string(),
            connected_clients,
            timestamp: Utc::now(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            WsMessage::Connection { .. } => "connection",
            WsMessage::CarnageUpdate { .. } => "carnage_update",
            WsMessage::Echo { .. } => "echo",
            WsMessage::Heartbeat { .. } => "heartbeat",
        }
    }
}
