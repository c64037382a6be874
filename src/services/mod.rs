pub mod query;
pub mod stats;

pub use query::{project_props, PredictionFilter};
pub use stats::PlatformStats;
