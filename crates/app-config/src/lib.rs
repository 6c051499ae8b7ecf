// In crates/app-config/src/lib.rs

use std::collections::HashMap;
use std::path::Path;

use config::{Config, File, FileFormat, Value, ValueKind};
use core_types::{Error, Result};

pub mod types;

// Re-export the most important types for easy access.
pub use types::{REQUIRED_KEYS, RunConfig};
use types::RawRunConfig;

/// Loads and validates the run configuration at `path`.
///
/// The document format follows the file extension (`.toml`, `.json`),
/// falling back to YAML. Extra keys are ignored.
pub fn load_run_config(path: impl AsRef<Path>) -> Result<RunConfig> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotFound {
            what: "Configuration file",
            path: path.display().to_string(),
        });
    }

    let source = Config::builder()
        .add_source(File::from(path).format(format_for(path)))
        .build()
        .map_err(|e| Error::Format(format!("Invalid configuration file format: {e}")))?;

    // A null or empty document deserializes to an empty (or no) table.
    let table: HashMap<String, Value> = source
        .clone()
        .try_deserialize()
        .map_err(|_| Error::Format("Configuration file is empty or invalid".to_string()))?;
    if table.is_empty() {
        return Err(Error::Format("Configuration file is empty or invalid".to_string()));
    }

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !table.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingField(format!(
            "Missing required configuration keys: {missing:?}"
        )));
    }

    // `config` converts freely between scalars (2.6 -> 3, true -> 1), so the
    // written kinds are checked before deserializing.
    require_integer(&table, "seed")?;
    require_integer(&table, "window")?;
    require_string(&table, "version")?;

    let raw: RawRunConfig = source
        .try_deserialize()
        .map_err(|e| Error::InvalidValue(format!("Invalid configuration value: {e}")))?;
    let config = RunConfig::try_from(raw)?;

    tracing::info!(
        seed = config.seed,
        window = config.window,
        version = %config.version,
        "Config loaded"
    );
    Ok(config)
}

fn require_integer(table: &HashMap<String, Value>, key: &str) -> Result<()> {
    match &table[key].kind {
        ValueKind::I64(_) | ValueKind::I128(_) | ValueKind::U64(_) | ValueKind::U128(_) => Ok(()),
        other => Err(Error::InvalidValue(format!(
            "Configuration value '{key}' must be an integer, got {other}"
        ))),
    }
}

fn require_string(table: &HashMap<String, Value>, key: &str) -> Result<()> {
    match &table[key].kind {
        ValueKind::String(_) => Ok(()),
        other => Err(Error::InvalidValue(format!(
            "Configuration value '{key}' must be a string, got {other}"
        ))),
    }
}

fn format_for(path: &Path) -> FileFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => FileFormat::Toml,
        Some("json") => FileFormat::Json,
        _ => FileFormat::Yaml,
    }
}
