//! Error type shared by the configuration and loading layer.
//!
//! Lifecycle misuse (calling operations in the wrong order) is reported by
//! `wsn-sim`, which wraps `WsnError` as one of its variants.

use thiserror::Error;

/// Errors produced while building or loading parameters and scenarios.
#[derive(Debug, Error)]
pub enum WsnError {
    /// A parameter or scenario value is outside its legal domain.
    #[error("validation error: {0}")]
    Validation(String),

    /// External input could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for WsnError {
    fn from(e: serde_json::Error) -> Self {
        WsnError::Parse(e.to_string())
    }
}

/// Shorthand result type for all `wsn-*` crates.
pub type WsnResult<T> = Result<T, WsnError>;
