// In crates/core-types/src/lib.rs

pub mod error;
pub mod types;

// Re-export the most important types for easy access from other crates.
pub use error::{Error, ErrorCategory, Result};
pub use types::{PriceRow, PriceSeries, ProcessedRow, Signal, SmoothedRow};
