// In crates/app-config/src/types.rs

use serde::Deserialize;

use core_types::{Error, Result};

/// The keys a run configuration must define.
pub const REQUIRED_KEYS: [&str; 3] = ["seed", "window", "version"];

/// Validated settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Seed for any stochastic stage. Carried explicitly; nothing seeds a
    /// process-wide generator.
    pub seed: i64,
    /// Rolling window length in rows. Always at least 1.
    pub window: usize,
    /// Version tag echoed into every report.
    pub version: String,
}

/// The document as written, before range checks.
#[derive(Deserialize, Debug)]
pub(crate) struct RawRunConfig {
    pub seed: i64,
    pub window: i64,
    pub version: String,
}

impl TryFrom<RawRunConfig> for RunConfig {
    type Error = Error;

    fn try_from(raw: RawRunConfig) -> Result<Self> {
        let window = usize::try_from(raw.window)
            .ok()
            .filter(|w| *w > 0)
            .ok_or_else(|| {
                Error::InvalidValue(format!(
                    "Configuration value 'window' must be a positive integer, got {}",
                    raw.window
                ))
            })?;

        Ok(Self {
            seed: raw.seed,
            window,
            version: raw.version,
        })
    }
}
