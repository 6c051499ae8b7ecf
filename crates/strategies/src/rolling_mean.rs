// In crates/strategies/src/rolling_mean.rs

use std::str::FromStr;

use crate::types::RollingMeanSettings;
use core_types::{Error, PriceRow, ProcessedRow, Result, Signal, SmoothedRow};
use rust_decimal::Decimal;

/// Attaches a simple moving average of `close` to every row.
///
/// The mean at row `i` covers rows `i - window + 1 ..= i` and is `None`
/// until a full window exists. No padding, weighting or centering. Each
/// window is summed on its own, so no rounding error carries between rows.
pub fn compute_rolling_mean(rows: &[PriceRow], window: usize) -> Result<Vec<SmoothedRow>> {
    if window == 0 {
        return Err(Error::InvalidValue(format!(
            "Rolling window must be a positive integer, got {window}"
        )));
    }

    let closes: Vec<f64> = rows.iter().map(|r| r.close).collect();
    let smoothed: Vec<SmoothedRow> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| SmoothedRow {
            price: row.clone(),
            rolling_mean: (i + 1 >= window).then(|| window_mean(&closes[i + 1 - window..=i])),
        })
        .collect();

    if rows.len() < window {
        tracing::warn!(
            rows = rows.len(),
            window,
            "Not enough history for a single full window"
        );
    }
    tracing::info!(window, "Rolling mean calculated");
    Ok(smoothed)
}

/// Arithmetic mean of one window.
///
/// Closes are summed as decimals taken from their shortest round-trip text,
/// then the quotient is parsed back to the nearest `f64`. A window of equal
/// closes therefore averages to exactly that close. Values a `Decimal`
/// cannot hold fall back to a plain `f64` mean.
fn window_mean(closes: &[f64]) -> f64 {
    decimal_mean(closes).unwrap_or_else(|| closes.iter().sum::<f64>() / closes.len() as f64)
}

fn decimal_mean(closes: &[f64]) -> Option<f64> {
    let mut sum = Decimal::ZERO;
    for close in closes {
        let value = Decimal::from_str(&close.to_string()).ok()?;
        sum = sum.checked_add(value)?;
    }
    let mean = sum.checked_div(Decimal::from(closes.len()))?;
    mean.to_string().parse().ok()
}

/// Derives a signal per row: `Long` when `close` is strictly above its
/// rolling mean, `Flat` otherwise, including every row without a mean.
pub fn generate_signals(rows: &[SmoothedRow]) -> Vec<ProcessedRow> {
    let processed: Vec<ProcessedRow> = rows
        .iter()
        .map(|row| ProcessedRow {
            price: row.price.clone(),
            rolling_mean: row.rolling_mean,
            signal: signal_for(row.price.close, row.rolling_mean),
        })
        .collect();

    let longs = processed.iter().filter(|r| r.signal.is_long()).count();
    tracing::info!(longs, "Signals generated");
    processed
}

fn signal_for(close: f64, rolling_mean: Option<f64>) -> Signal {
    match rolling_mean {
        Some(mean) if close > mean => Signal::Long,
        _ => Signal::Flat,
    }
}

/// The close-above-rolling-mean strategy as a single unit.
#[derive(Debug, Clone)]
pub struct RollingMeanCrossover {
    settings: RollingMeanSettings,
}

impl RollingMeanCrossover {
    pub fn new(settings: RollingMeanSettings) -> Self {
        Self { settings }
    }

    pub fn name(&self) -> &'static str {
        "RollingMeanCrossover"
    }

    pub fn rolling_mean(&self, rows: &[PriceRow]) -> Result<Vec<SmoothedRow>> {
        compute_rolling_mean(rows, self.settings.window)
    }

    pub fn signals(&self, rows: &[SmoothedRow]) -> Vec<ProcessedRow> {
        generate_signals(rows)
    }
}
