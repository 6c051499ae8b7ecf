// In app/src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

mod logging;
mod pipeline;

use crate::pipeline::{Outcome, Pipeline, RunPaths};

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Computes a rolling-mean signal over a price CSV and writes a JSON metrics report."
)]
struct Cli {
    /// Path to the input price CSV.
    #[arg(long)]
    input: PathBuf,

    /// Path to the run configuration (YAML, TOML or JSON).
    #[arg(long)]
    config: PathBuf,

    /// Path the JSON metrics report is written to.
    #[arg(long)]
    output: PathBuf,

    /// Path to the run log. Truncated at start.
    #[arg(long)]
    log_file: PathBuf,
}

impl Cli {
    fn run_paths(&self) -> RunPaths {
        RunPaths {
            input: self.input.clone(),
            config: self.config.clone(),
            output: self.output.clone(),
        }
    }
}

// --- Main Application Entry Point ---

fn main() -> ExitCode {
    let started = Instant::now();
    let cli = Cli::parse();

    let dispatch = match logging::file_dispatch(&cli.log_file) {
        Ok(dispatch) => dispatch,
        Err(err) => {
            eprintln!("{err:#}; logging to stderr instead");
            logging::stderr_dispatch()
        }
    };

    // The log file stays open only for the duration of the run.
    let outcome = tracing::dispatcher::with_default(&dispatch, || {
        Pipeline::new(cli.run_paths(), started).run()
    });
    drop(dispatch);

    if let Outcome::Failed { stage, error } = &outcome {
        eprintln!("Run failed after stage {stage:?}: {error}");
    }
    outcome.exit_code()
}
