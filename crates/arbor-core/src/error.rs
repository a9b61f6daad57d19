//! Unified error types for the arbor ecosystem
//!
//! This module provides a common error type [`ArborError`] that can represent
//! errors from any part of the system. Option-processing failures carry their
//! own variants so callers can assert on the kind of violation instead of
//! string-matching diagnostics.

use thiserror::Error;

/// Unified error type for all arbor operations.
///
/// Every variant renders as a single-line human-readable diagnostic; the
/// driver prints it to stderr and maps it to exit status 1.
#[derive(Error, Debug)]
pub enum ArborError {
    /// I/O errors (file access, help rendering sinks, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A bound textual argument could not be converted to its field's type
    #[error("invalid value '{value}' for -{short} / --{long}: expected {expected}")]
    Conversion {
        short: String,
        long: String,
        value: String,
        expected: &'static str,
    },

    /// A numeric field's post-bind value falls outside its valid interval
    #[error("{0}")]
    Range(String),

    /// Two flags declared incompatible are both set
    #[error("{0}")]
    MutualExclusion(String),

    /// Preset selection outside the closed enumeration
    #[error("unknown forest preset '{0}'; supported values: RF, GBT")]
    UnknownPreset(String),

    /// A required argument was never supplied
    #[error("missing required argument: {0}")]
    MissingArgument(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using ArborError.
pub type ArborResult<T> = Result<T, ArborError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for ArborError {
    fn from(err: anyhow::Error) -> Self {
        ArborError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for ArborError {
    fn from(s: String) -> Self {
        ArborError::Other(s)
    }
}

impl From<&str> for ArborError {
    fn from(s: &str) -> Self {
        ArborError::Other(s.to_string())
    }
}
