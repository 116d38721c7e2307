//! Error types for the fetch boundary.
//!
//! Every failure of a user request is caught at the fetch boundary and
//! normalized into [`ErrorInfo`] before it reaches application state, so
//! the view layer never deals with transport-level error types.

use thiserror::Error;

/// Failure classes of a single fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status} - {reason}")]
    Http { status: u16, reason: String },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Normalized error record carried in application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
    /// Set only for [`FetchError::Http`].
    pub http_status: Option<u16>,
}

impl FetchError {
    /// Project the error into the record stored alongside the failed status.
    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            message: self.to_string(),
            http_status: match self {
                Self::Http { status, .. } => Some(*status),
                Self::Network(_) | Self::Decode(_) => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_carries_status_and_reason_phrase() {
        let err = FetchError::Http {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        let info = err.to_error_info();
        assert_eq!(info.http_status, Some(500));
        assert_eq!(info.message, "HTTP error! status: 500 - Internal Server Error");
    }

    #[test]
    fn network_error_has_no_http_status() {
        let info = FetchError::Network("connection refused".to_string()).to_error_info();
        assert_eq!(info.http_status, None);
        assert!(info.message.contains("connection refused"));
    }
}
