// In crates/analytics/src/engine.rs

use std::time::Duration;

use crate::types::{ErrorRecord, FALLBACK_VERSION, MetricsRecord, RunStatus, SIGNAL_RATE_METRIC};
use app_config::RunConfig;
use core_types::ProcessedRow;
use rust_decimal::prelude::*;

/// Decimal places kept in the reported signal rate.
pub const SIGNAL_RATE_DP: u32 = 4;

/// Turns processed rows into the run's summary record.
#[derive(Default)]
pub struct MetricsEngine;

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the success record. `elapsed` is the wall-clock time since the
    /// run started; it is truncated to whole milliseconds.
    pub fn summarize(
        &self,
        rows: &[ProcessedRow],
        config: &RunConfig,
        elapsed: Duration,
    ) -> MetricsRecord {
        let value = signal_rate(rows);
        tracing::info!(
            signal_rate = value,
            rows_processed = rows.len(),
            "Metrics computed"
        );

        MetricsRecord {
            version: config.version.clone(),
            rows_processed: rows.len(),
            metric: SIGNAL_RATE_METRIC,
            value,
            latency_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            seed: config.seed,
            status: RunStatus::Success,
        }
    }
}

/// Fraction of rows signalling long, over all rows (rows without a rolling
/// mean count as flat).
///
/// The ratio is computed exactly and rounded half-to-even, so 1/32 gives
/// 0.0312 and 3/32 gives 0.0938.
pub fn signal_rate(rows: &[ProcessedRow]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let longs = rows.iter().filter(|r| r.signal.is_long()).count();
    (Decimal::from(longs) / Decimal::from(rows.len()))
        .round_dp_with_strategy(SIGNAL_RATE_DP, RoundingStrategy::MidpointNearestEven)
        .to_f64()
        .unwrap_or(0.0)
}

/// Builds the record written when a run fails. Without a loaded config the
/// fallback version is used.
pub fn error_report(message: &str, version: Option<&str>) -> ErrorRecord {
    ErrorRecord {
        version: version.unwrap_or(FALLBACK_VERSION).to_string(),
        status: RunStatus::Error,
        error_message: message.to_string(),
    }
}
