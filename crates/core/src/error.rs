//! Error types for kodo-core
//!
//! Provides the unified error type shared by the core and client crates.
//! Every operation returns at most one of these; any error means the
//! operation did not happen. There is no retry or partial-success state.

use thiserror::Error;

/// Result type alias for resource-service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for resource-service operations
#[derive(Error, Debug)]
pub enum Error {
    /// Local IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON response body
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure (connect, TLS, mid-body)
    #[error("Network error: {0}")]
    Network(String),

    /// The remote service rejected the request with a non-2xx status
    #[error("Service error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The download step of a fetch returned a non-2xx response
    #[error("Download failed (status {status}): {body}")]
    Download { status: u16, body: String },

    /// A fetch refused to overwrite an existing destination file
    #[error("Destination already exists: {0}")]
    DestinationExists(String),
}

impl Error {
    /// Remote status code, when this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::Download { status, .. } => Some(*status),
            _ => None,
        }
    }
}
