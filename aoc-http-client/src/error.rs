//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),

    /// Every attempt allowed by the retry policy failed
    #[error("Timed out after {attempts} attempt(s): {last}")]
    RetriesExhausted {
        /// Number of requests that were made
        attempts: u32,
        /// Error from the final attempt
        #[source]
        last: Box<AocError>,
    },
}

impl AocError {
    /// Whether trying the same request again could succeed.
    ///
    /// Transport failures and error statuses count: inputs answer with an
    /// error until the puzzle unlocks.
    pub fn is_transient(&self) -> bool {
        matches!(self, AocError::Request(_) | AocError::InvalidStatus { .. })
    }
}
