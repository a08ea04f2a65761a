//! Error types for the hotcold crate.
//!
//! This module defines a small error enum covering the few ways a colormap
//! evaluation or configuration load can fail.

use thiserror::Error;

/// The main error type for colormap operations.
#[derive(Error, Debug)]
pub enum ColormapError {
    /// An input argument fell outside the unit interval.
    ///
    /// Out-of-range inputs are rejected rather than clamped, so callers
    /// learn about bad normalization instead of getting a silently pinned
    /// color. The error names the offending argument and its value.
    #[error("Argument out of range: {param} = {value} (expected a value in [0, 1])")]
    OutOfRange { param: &'static str, value: f64 },

    /// Invalid parameter errors (unknown names, degenerate table sizes)
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ColormapError
pub type Result<T> = std::result::Result<T, ColormapError>;
