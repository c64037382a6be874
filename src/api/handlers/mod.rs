pub mod parlays;
pub mod predictions;
pub mod stats;
pub mod system;

pub use parlays::*;
pub use predictions::*;
pub use stats::*;
pub use system::*;
