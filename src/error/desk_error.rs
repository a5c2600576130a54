//! Unified error type for the opsdesk application.

use std::fmt;

use super::auth::AuthError;
use super::config::ConfigError;
use super::network::NetworkError;

/// Unified error type for the opsdesk application.
///
/// `DeskError` consolidates the domain-specific error types into a single
/// enum, enabling consistent handling, retry classification, and
/// user-facing messaging across the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeskError {
    /// Network-related errors (transport, HTTP statuses).
    Network(NetworkError),

    /// Authentication errors.
    Auth(AuthError),

    /// Configuration errors (programmer/environment mistakes).
    Config(ConfigError),
}

impl DeskError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            DeskError::Network(err) => err.is_retryable(),
            DeskError::Auth(_) => false,
            DeskError::Config(_) => false,
        }
    }

    /// Check if signing in again can resolve this error.
    pub fn requires_signin(&self) -> bool {
        match self {
            DeskError::Auth(err) => err.requires_signin(),
            DeskError::Network(NetworkError::RequestFailed { status, .. }) => *status == 401,
            _ => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            DeskError::Network(err) => err.user_message(),
            DeskError::Auth(err) => err.user_message(),
            DeskError::Config(err) => err.to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DeskError::Network(err) => err.error_code(),
            DeskError::Auth(err) => err.error_code(),
            DeskError::Config(_) => "CONFIG",
        }
    }
}

impl fmt::Display for DeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeskError::Network(err) => write!(f, "{}", err),
            DeskError::Auth(err) => write!(f, "{}", err),
            DeskError::Config(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeskError::Network(err) => Some(err),
            DeskError::Auth(err) => Some(err),
            DeskError::Config(err) => Some(err),
        }
    }
}

impl From<NetworkError> for DeskError {
    fn from(err: NetworkError) -> Self {
        DeskError::Network(err)
    }
}

impl From<AuthError> for DeskError {
    fn from(err: AuthError) -> Self {
        DeskError::Auth(err)
    }
}

impl From<ConfigError> for DeskError {
    fn from(err: ConfigError) -> Self {
        DeskError::Config(err)
    }
}
