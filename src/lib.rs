pub mod adapters;
pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod realtime;
pub mod services;

pub use adapters::{run_api_server, start_api_server, SampleDataStore};
pub use config::AppConfig;
pub use domain::{
    ConfidenceLevel, DailyParlays, Event, ParlaySport, Prediction, PredictionSource, Prop,
    Recommendation, SixParlay, SixPick,
};
pub use error::{ButcherError, Result};
pub use realtime::{ConnectionRegistry, HeartbeatBroadcaster, WsMessage};
pub use services::{PlatformStats, PredictionFilter};
