//! Configuration errors.
//!
//! Programmer or environment errors that are fatal to the operation that
//! raised them. They are never recoverable by retrying.

use thiserror::Error;

/// Configuration error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A collection view was constructed with a non-positive page size.
    #[error("page size must be a positive integer")]
    InvalidPageSize,

    /// A mutation was attempted against a collection the backend only
    /// serves read-only.
    #[error("{resource} records cannot be modified remotely")]
    ReadOnlyResource { resource: &'static str },

    /// The home directory could not be determined for credentials storage.
    #[error("home directory could not be determined")]
    NoHomeDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ConfigError::InvalidPageSize.to_string(),
            "page size must be a positive integer"
        );
        assert_eq!(
            ConfigError::ReadOnlyResource { resource: "leads" }.to_string(),
            "leads records cannot be modified remotely"
        );
    }
}
