// In crates/analytics/src/types.rs

use serde::Serialize;

/// The metric name reported in every success record.
pub const SIGNAL_RATE_METRIC: &str = "signal_rate";

/// Version reported when the run failed before its config loaded.
pub const FALLBACK_VERSION: &str = "v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Error,
}

/// Summary of a successful run. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRecord {
    pub version: String,
    pub rows_processed: usize,
    pub metric: &'static str,
    pub value: f64,
    pub latency_ms: u64,
    pub seed: i64,
    pub status: RunStatus,
}

/// What a failed run writes instead of metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    pub version: String,
    pub status: RunStatus,
    pub error_message: String,
}
