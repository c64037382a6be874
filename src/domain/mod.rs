pub mod event;
pub mod parlay;
pub mod prediction;
pub mod source;

pub use event::*;
pub use parlay::*;
pub use prediction::*;
pub use source::PredictionSource;
