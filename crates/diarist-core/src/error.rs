//! Error types for Diarist.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The backend could not be reached (connect failure, timeout, broken body).
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The backend answered with a non-success status.
    #[error("Backend error {status}: {body}")]
    Backend { status: u16, body: String },

    /// Records and analysis results passed to the timeline builder disagree in length.
    #[error("Length mismatch: {records} records, {results} analysis results")]
    LengthMismatch { records: usize, results: usize },

    #[error("Ingest error: {0}")]
    Ingest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the error came from a text-analysis backend call.
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::BackendUnavailable(_) | Self::Backend { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
