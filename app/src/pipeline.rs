// In app/src/pipeline.rs

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use analytics::{MetricsEngine, MetricsRecord};
use core_types::{Error, Result};
use strategies::{RollingMeanCrossover, RollingMeanSettings};

/// Files a single run reads and writes.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub input: PathBuf,
    pub config: PathBuf,
    pub output: PathBuf,
}

/// Progress of a run. Stages are entered strictly in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Init,
    ConfigLoaded,
    DataLoaded,
    RollingComputed,
    SignalsGenerated,
    MetricsComputed,
    Written,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Init => Some(Stage::ConfigLoaded),
            Stage::ConfigLoaded => Some(Stage::DataLoaded),
            Stage::DataLoaded => Some(Stage::RollingComputed),
            Stage::RollingComputed => Some(Stage::SignalsGenerated),
            Stage::SignalsGenerated => Some(Stage::MetricsComputed),
            Stage::MetricsComputed => Some(Stage::Written),
            Stage::Written => None,
        }
    }
}

/// How a run ended. `stage` on failure is the last stage that completed.
#[derive(Debug)]
pub enum Outcome {
    Success(MetricsRecord),
    Failed { stage: Stage, error: Error },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Every handled failure class maps to the same non-zero status.
    pub fn exit_status(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Drives one run from config to artifact.
///
/// The output path is written exactly once: the metrics record on success,
/// an error record otherwise.
pub struct Pipeline {
    paths: RunPaths,
    started: Instant,
    stage: Stage,
    /// Version from the config, once it has loaded.
    version: Option<String>,
}

impl Pipeline {
    pub fn new(paths: RunPaths, started: Instant) -> Self {
        Self {
            paths,
            started,
            stage: Stage::Init,
            version: None,
        }
    }

    pub fn run(mut self) -> Outcome {
        tracing::info!("Job started");

        match self.execute() {
            Ok(record) => {
                tracing::info!(
                    latency_ms = self.started.elapsed().as_millis() as u64,
                    "Job completed successfully"
                );
                Outcome::Success(record)
            }
            Err(error) => self.fail(error),
        }
    }

    fn execute(&mut self) -> Result<MetricsRecord> {
        let config = app_config::load_run_config(&self.paths.config)?;
        self.version = Some(config.version.clone());
        self.advance(Stage::ConfigLoaded);

        let series = market_data::load_price_series(&self.paths.input)?;
        self.advance(Stage::DataLoaded);

        let strategy = RollingMeanCrossover::new(RollingMeanSettings::new(config.window));
        tracing::info!(strategy = strategy.name(), window = config.window, "Strategy ready");

        let smoothed = strategy.rolling_mean(series.rows())?;
        self.advance(Stage::RollingComputed);

        let processed = strategy.signals(&smoothed);
        self.advance(Stage::SignalsGenerated);

        let record = MetricsEngine::new().summarize(&processed, &config, self.started.elapsed());
        self.advance(Stage::MetricsComputed);

        analytics::publish(&record, &self.paths.output)?;
        self.advance(Stage::Written);

        Ok(record)
    }

    fn advance(&mut self, to: Stage) {
        debug_assert_eq!(self.stage.next(), Some(to), "stage skipped or repeated");
        self.stage = to;
    }

    fn fail(self, error: Error) -> Outcome {
        tracing::error!(stage = ?self.stage, "{}: {}", error.category().label(), error);

        let record = analytics::error_report(&error.to_string(), self.version.as_deref());
        if let Err(write_err) = analytics::write_report(&record, &self.paths.output) {
            tracing::error!(
                path = %self.paths.output.display(),
                "Failed to write error report: {}",
                write_err
            );
        }

        Outcome::Failed {
            stage: self.stage,
            error,
        }
    }
}
