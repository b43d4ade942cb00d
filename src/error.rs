//! Error types for the Devsim curve generator.
//!
//! This module provides a unified error type [`DevsimError`] that covers
//! parameter validation at the library boundary and the rendering/export
//! surface. The curve formulas themselves have no error paths: once a
//! parameter set has been constructed, evaluation cannot fail.

use thiserror::Error;

/// Result type alias using [`DevsimError`].
pub type Result<T> = std::result::Result<T, DevsimError>;

/// Unified error type for all Devsim operations.
#[derive(Error, Debug)]
pub enum DevsimError {
    // ============ Parameter Errors ============
    /// Parameter value outside its valid inclusive range
    #[error("Parameter '{param}' = {value} is outside the valid range [{min}, {max}]")]
    ParameterOutOfRange {
        param: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    // ============ Output Errors ============
    /// Attempted to render a curve with no data points
    #[error("Cannot render an empty curve")]
    EmptyCurve,

    /// Plot backend failure
    #[error("Render error: {message}")]
    Render { message: String },

    /// Error writing an output file
    #[error("Failed to write output file '{path}': {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DevsimError {
    /// Create a parameter-out-of-range error.
    pub fn out_of_range(param: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::ParameterOutOfRange {
            param,
            value,
            min,
            max,
        }
    }

    /// Create a render error from any backend error message.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create a file-write error.
    pub fn file_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}
