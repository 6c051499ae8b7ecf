// In crates/strategies/src/types.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RollingMeanSettings {
    /// Number of trailing rows averaged, current row included.
    pub window: usize,
}

impl RollingMeanSettings {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}
