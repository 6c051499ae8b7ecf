// In crates/analytics/src/report.rs

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::types::MetricsRecord;
use core_types::{Error, Result};
use serde::Serialize;

/// Serializes `record` as pretty JSON and writes it to `path`, replacing
/// any previous content. Returns the text that was written.
pub fn write_report<T: Serialize>(record: &T, path: impl AsRef<Path>) -> Result<String> {
    let text = serde_json::to_string_pretty(record)
        .map_err(|e| Error::Unexpected(format!("Failed to serialize report: {e}")))?;

    let mut file = File::create(path.as_ref())?;
    file.write_all(text.as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()?;
    Ok(text)
}

/// Writes the success record to `path` and echoes it to stdout.
pub fn publish(record: &MetricsRecord, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let text = write_report(record, path)?;
    tracing::info!(path = %path.display(), "Metrics written");
    println!("{text}");
    Ok(())
}
