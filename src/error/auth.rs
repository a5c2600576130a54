//! Authentication error types.

use std::fmt;

/// Authentication-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Sign-in was rejected by the server.
    SignInFailed { message: String },

    /// The login response carried no token.
    MissingToken,

    /// An authenticated call was attempted without a signed-in session.
    NotSignedIn,

    /// Credentials could not be read from or written to disk.
    Storage { message: String },
}

impl AuthError {
    /// Check if signing in again can resolve this error.
    pub fn requires_signin(&self) -> bool {
        matches!(
            self,
            AuthError::SignInFailed { .. } | AuthError::MissingToken | AuthError::NotSignedIn
        )
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::SignInFailed { message } => message.clone(),
            AuthError::MissingToken => {
                "Sign-in succeeded but no session token was issued.".to_string()
            }
            AuthError::NotSignedIn => "You are not signed in.".to_string(),
            AuthError::Storage { .. } => {
                "Your saved session could not be accessed.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::SignInFailed { .. } => "AUTH_SIGNIN_FAILED",
            AuthError::MissingToken => "AUTH_MISSING_TOKEN",
            AuthError::NotSignedIn => "AUTH_NOT_SIGNED_IN",
            AuthError::Storage { .. } => "AUTH_STORAGE",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::SignInFailed { message } => write!(f, "sign-in failed: {}", message),
            AuthError::MissingToken => write!(f, "login response carried no token"),
            AuthError::NotSignedIn => write!(f, "not signed in"),
            AuthError::Storage { message } => write!(f, "credentials storage: {}", message),
        }
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_signin() {
        assert!(AuthError::MissingToken.requires_signin());
        assert!(AuthError::NotSignedIn.requires_signin());
        assert!(AuthError::SignInFailed {
            message: "bad password".into()
        }
        .requires_signin());
        assert!(!AuthError::Storage {
            message: "io".into()
        }
        .requires_signin());
    }

    #[test]
    fn test_signin_failed_surfaces_server_message() {
        let err = AuthError::SignInFailed {
            message: "Invalid email or password".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid email or password");
    }
}
