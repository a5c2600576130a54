//! Sign-in call against the backend.

use serde_json::Value;

use crate::auth::context::CurrentUser;
use crate::error::{classify_http_error, AuthError, DeskResult};
use crate::traits::{Headers, HttpClient};

/// Path of the login endpoint.
const LOGIN_PATH: &str = "/auth/users/login";

/// Fallback when the failure body carries no `msg`.
const GENERIC_SIGNIN_ERROR: &str = "Failed to sign in. Please check your credentials.";

/// Client for the authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient<C> {
    base_url: String,
    http: C,
}

impl<C: HttpClient> AuthClient<C> {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>, http: C) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sign in with email and password.
    ///
    /// POST /auth/users/login with `{email, password}`. The success
    /// envelope is `{user: {token, ...}}`; a response without a token is
    /// a failed sign-in. Failure bodies surface their `msg` field when
    /// present.
    pub async fn sign_in(&self, email: &str, password: &str) -> DeskResult<CurrentUser> {
        let url = format!("{}{}", self.base_url, LOGIN_PATH);
        let body = serde_json::json!({ "email": email, "password": password }).to_string();

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let response = self
            .http
            .post(&url, &body, &headers)
            .await
            .map_err(classify_http_error)?;

        let payload: Option<Value> = response.json().ok();

        if !response.is_success() {
            let message = payload
                .as_ref()
                .and_then(|v| v.get("msg"))
                .and_then(Value::as_str)
                .unwrap_or(GENERIC_SIGNIN_ERROR)
                .to_string();
            tracing::warn!(status = response.status, "sign-in rejected");
            return Err(AuthError::SignInFailed { message }.into());
        }

        let user: CurrentUser = payload
            .as_ref()
            .and_then(|v| v.get("user"))
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .ok_or(AuthError::MissingToken)?;

        if user.token.is_empty() {
            return Err(AuthError::MissingToken.into());
        }

        tracing::info!("sign-in succeeded");
        Ok(user)
    }
}
