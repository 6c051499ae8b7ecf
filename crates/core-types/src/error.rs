// In crates/core-types/src/error.rs

use thiserror::Error;

/// Every way a pipeline run can fail.
///
/// Each anticipated failure has a named variant; `Unexpected` is the final
/// fallback for anything else (I/O, serialization, library errors).
#[derive(Error, Debug)]
pub enum Error {
    #[error("{what} not found: {path}")]
    NotFound { what: &'static str, path: String },

    #[error("{0}")]
    Format(String),

    #[error("{0}")]
    MissingField(String),

    #[error("{0}")]
    EmptyData(String),

    #[error("{0}")]
    InvalidValue(String),

    #[error("{0}")]
    Unexpected(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}

/// The coarse bucket an error is logged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    MissingField,
    Validation,
    Unexpected,
}

impl ErrorCategory {
    /// The prefix used for the error line in the run log.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "File error",
            ErrorCategory::MissingField => "Key error",
            ErrorCategory::Validation => "Validation error",
            ErrorCategory::Unexpected => "Unexpected error",
        }
    }
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::NotFound { .. } => ErrorCategory::NotFound,
            Error::MissingField(_) => ErrorCategory::MissingField,
            Error::Format(_) | Error::EmptyData(_) | Error::InvalidValue(_) => {
                ErrorCategory::Validation
            }
            Error::Unexpected(_) => ErrorCategory::Unexpected,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
