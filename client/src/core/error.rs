//! # Common Error Types
//!
//! Consolidated error handling for the client library.
//!
//! ## Error Categories
//!
//! - **Network**: the request never produced a response (DNS, refused, timeout)
//! - **Http**: the backend answered with a non-success status
//! - **Parse**: the response body was not the JSON we expected
//! - **Config**: invalid configuration (bad base URL, zero timeout)
//! - **Storage**: the token store could not be read or written
//!
//! Verse retrieval never returns these to callers; every other endpoint does.
//!
//! ```rust
//! use islami_client::core::error::ApiError;
//!
//! let err = ApiError::Http { status: 404, message: "Favori bulunamadı".to_string() };
//! assert_eq!(err.to_string(), "HTTP 404: Favori bulunamadı");
//! assert!(!err.is_unauthorized());
//! ```

use thiserror::Error;

/// Client-wide error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure before any response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the backend's `detail` when it sent one.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Malformed or unexpected response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Token storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Status code for [`ApiError::Http`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 401 responses, i.e. the stored token is missing or expired.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network(format!("request timed out: {}", err))
        } else if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_for_http_errors() {
        let http = ApiError::Http { status: 401, message: "Not authenticated".into() };
        assert_eq!(http.status(), Some(401));
        assert!(http.is_unauthorized());

        let network = ApiError::Network("connection refused".into());
        assert_eq!(network.status(), None);
        assert!(!network.is_unauthorized());
    }

    #[test]
    fn test_json_error_becomes_parse() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
