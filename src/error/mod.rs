//! Unified error handling for opsdesk.
//!
//! - **Domain-specific errors**: Network, Auth, and Config errors
//! - **Unified error type**: [`DeskError`] consolidates all error types
//! - **Result alias**: [`DeskResult<T>`] for consistent return types
//!
//! Every remote-call error is caught at the state-machine boundary and
//! converted into a user-facing message via [`DeskError::user_message`];
//! errors never propagate past the state machine as panics.
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network  | Transport failures, failure statuses | Sometimes |
//! | Auth     | Sign-in, token, credential storage | No |
//! | Config   | Programmer/environment errors | No |

mod auth;
mod config;
mod desk_error;
mod network;
mod result;

pub use auth::AuthError;
pub use config::ConfigError;
pub use desk_error::DeskError;
pub use network::{classify_http_error, NetworkError};
pub use result::DeskResult;

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Errors from every domain flow through the unified type.
    #[test]
    fn test_error_unification() {
        let errors: Vec<DeskError> = vec![
            NetworkError::Transport {
                message: "connection refused".into(),
            }
            .into(),
            AuthError::NotSignedIn.into(),
            ConfigError::InvalidPageSize.into(),
        ];

        for err in &errors {
            assert!(!err.user_message().is_empty());
            assert!(!err.error_code().is_empty());
        }
    }
}
