// In app/src/logging.rs

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{Dispatch, Level};

/// Builds a dispatcher that writes one plain-text line per event to `path`.
/// The file is truncated, and closed once the dispatcher is dropped.
pub fn file_dispatch(path: &Path) -> Result<Dispatch> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(Level::INFO)
        .finish();
    Ok(Dispatch::new(subscriber))
}

/// Used when the log file cannot be opened, so the run still reports.
pub fn stderr_dispatch() -> Dispatch {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(Level::INFO)
        .finish();
    Dispatch::new(subscriber)
}
