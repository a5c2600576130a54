//! Network-related error types.
//!
//! Errors produced by the remote collection client: transport failures
//! where no response arrived, and failure statuses from the backend.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// No response reached us (connection refused, DNS, TLS, ...).
    Transport { message: String },

    /// Request timed out.
    Timeout { message: String },

    /// Server responded with a failure status.
    RequestFailed { status: u16, message: String },

    /// Response arrived but could not be interpreted.
    InvalidResponse { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::Transport { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::RequestFailed { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::InvalidResponse { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::Transport { .. } => {
                "Unable to reach the server. Please check your connection.".to_string()
            }
            NetworkError::Timeout { .. } => {
                "The request timed out. The server may be slow or unreachable.".to_string()
            }
            NetworkError::RequestFailed { message, .. } => message.clone(),
            NetworkError::InvalidResponse { .. } => {
                "The server returned an unexpected response.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::Transport { .. } => "NET_TRANSPORT",
            NetworkError::Timeout { .. } => "NET_TIMEOUT",
            NetworkError::RequestFailed { .. } => "NET_REQUEST_FAILED",
            NetworkError::InvalidResponse { .. } => "NET_INVALID_RESPONSE",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Transport { message } => write!(f, "transport failure: {}", message),
            NetworkError::Timeout { message } => write!(f, "request timed out: {}", message),
            NetworkError::RequestFailed { status, message } => {
                write!(f, "request failed ({}): {}", status, message)
            }
            NetworkError::InvalidResponse { message } => {
                write!(f, "invalid response: {}", message)
            }
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a transport-level [`HttpError`] into a [`NetworkError`].
pub fn classify_http_error(err: HttpError) -> NetworkError {
    match err {
        HttpError::Timeout(message) => NetworkError::Timeout { message },
        HttpError::ConnectionFailed(message)
        | HttpError::InvalidUrl(message)
        | HttpError::Other(message) => NetworkError::Transport { message },
    }
}
