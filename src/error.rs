//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
///
/// Status codes are recorded for diagnostics only. A non-2xx response is
/// decoded exactly like a 2xx one, so an upstream error body usually ends up
/// as [`HttpError::Decode`].
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Failed to decode response (status {status}): {source}")]
    Decode {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    /// HTTP status of the response that failed to decode, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Decode { status, .. } => Some(*status),
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
