// In crates/strategies/src/lib.rs

pub mod rolling_mean;
pub mod types;

pub use rolling_mean::{RollingMeanCrossover, compute_rolling_mean, generate_signals};
pub use types::RollingMeanSettings;
