//! Error types for the figure data model

use thiserror::Error;

/// Core result type
pub type Result<T> = std::result::Result<T, OrreryError>;

/// Errors that can occur while assembling figure data
#[derive(Error, Debug)]
pub enum OrreryError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line in the clock-frequency file
    #[error("malformed clock sample on line {line}: {reason}")]
    MalformedSample { line: usize, reason: String },
}

impl OrreryError {
    /// Create a malformed-sample error for a 1-based line number
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedSample {
            line,
            reason: reason.into(),
        }
    }
}
