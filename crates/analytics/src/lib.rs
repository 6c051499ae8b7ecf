// In crates/analytics/src/lib.rs

pub mod engine;
pub mod report;
pub mod types;

pub use engine::{MetricsEngine, error_report, signal_rate};
pub use report::{publish, write_report};
pub use types::{ErrorRecord, FALLBACK_VERSION, MetricsRecord, RunStatus};
