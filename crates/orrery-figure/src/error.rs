//! Error types for the figure application

use thiserror::Error;

/// Figure result type
pub type Result<T> = std::result::Result<T, FigureError>;

/// Errors that can occur while fetching catalog data
#[derive(Error, Debug)]
pub enum FigureError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Archive answered with a non-success status
    #[error("archive returned HTTP {status}: {body}")]
    ArchiveStatus { status: u16, body: String },
}
