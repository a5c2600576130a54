//! Signed-in session context.
//!
//! The bearer credential is an explicit value handed to every remote
//! call, not ambient global state. It is created on sign-in success and
//! dropped on sign-out.

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by the login endpoint.
///
/// The backend sends more fields than we need; unknown ones are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Bearer token for authenticated requests.
    pub token: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl CurrentUser {
    /// Display name for the header bar: name, else email, else a stub.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("signed in")
    }
}

/// Credential context for authenticated calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    token: String,
    user: CurrentUser,
}

impl AuthContext {
    /// Build a context from a signed-in user. Returns `None` when the
    /// user carries no token.
    pub fn new(user: CurrentUser) -> Option<Self> {
        if user.token.is_empty() {
            return None;
        }
        Some(Self {
            token: user.token.clone(),
            user,
        })
    }

    /// The raw bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// The signed-in user.
    pub fn user(&self) -> &CurrentUser {
        &self.user
    }
}
