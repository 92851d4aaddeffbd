//! Error types for the TVmaze catalog client
//!
//! Every failure talking to the upstream API ends up here. Callers at the
//! browsing layer log these and fall back to an empty result.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all catalog operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum TvmazeError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status
    #[error("Upstream returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body was not the JSON shape we expect
    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),
}

impl Serialize for TvmazeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, TvmazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_status() {
        let error = TvmazeError::Status {
            status: 503,
            url: "https://api.tvmaze.com/search/shows?q=girls".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Upstream returned 503 for https://api.tvmaze.com/search/shows?q=girls"
        );
    }

    #[test]
    fn test_error_display_decode() {
        let inner = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error = TvmazeError::from(inner);
        assert!(error.to_string().starts_with("Failed to decode response: "));
    }

    #[test]
    fn test_error_serialize() {
        let error = TvmazeError::Status {
            status: 429,
            url: "/search/shows".to_string(),
        };
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Upstream returned 429 for /search/shows\"");
    }
}
