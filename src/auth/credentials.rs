//! Credentials storage and management.
//!
//! Persists the session token and the serialized current user to
//! `~/.opsdesk/credentials.json`: written at sign-in, read at startup,
//! removed at sign-out.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::auth::context::{AuthContext, CurrentUser};
use crate::error::AuthError;

/// The credentials directory name.
const CREDENTIALS_DIR: &str = ".opsdesk";

/// The credentials file name.
const CREDENTIALS_FILE: &str = "credentials.json";

/// Persisted session state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredCredentials {
    /// Bearer token for API authentication.
    pub token: Option<String>,
    /// The signed-in user as returned by the login endpoint.
    pub user: Option<CurrentUser>,
    /// Unix timestamp of when the session was saved.
    pub saved_at: Option<i64>,
}

impl StoredCredentials {
    /// Capture a fresh sign-in.
    pub fn from_sign_in(user: CurrentUser) -> Self {
        Self {
            token: Some(user.token.clone()),
            user: Some(user),
            saved_at: Some(chrono::Utc::now().timestamp()),
        }
    }

    /// Whether a token is present.
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Rebuild the credential context, if a usable session is stored.
    pub fn as_context(&self) -> Option<AuthContext> {
        let user = self.user.clone()?;
        AuthContext::new(user)
    }
}

/// Manages credential storage and retrieval.
#[derive(Debug, Clone)]
pub struct CredentialsManager {
    /// Path to the credentials file.
    credentials_path: PathBuf,
}

impl CredentialsManager {
    /// Create a manager rooted at `~/.opsdesk/credentials.json`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        let credentials_path = home.join(CREDENTIALS_DIR).join(CREDENTIALS_FILE);
        Some(Self { credentials_path })
    }

    /// Create a manager with an explicit path. Used by tests.
    pub fn with_path(credentials_path: PathBuf) -> Self {
        Self { credentials_path }
    }

    /// The path credentials are stored at.
    pub fn path(&self) -> &PathBuf {
        &self.credentials_path
    }

    /// Load stored credentials.
    ///
    /// A missing or unreadable file yields the empty default; a corrupt
    /// file is treated the same way rather than failing startup.
    pub fn load(&self) -> StoredCredentials {
        let file = match File::open(&self.credentials_path) {
            Ok(file) => file,
            Err(_) => return StoredCredentials::default(),
        };
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "stored credentials were unreadable, starting signed out");
            StoredCredentials::default()
        })
    }

    /// Persist credentials, creating the directory if needed.
    pub fn save(&self, credentials: &StoredCredentials) -> Result<(), AuthError> {
        if let Some(parent) = self.credentials_path.parent() {
            fs::create_dir_all(parent).map_err(|e| AuthError::Storage {
                message: e.to_string(),
            })?;
        }
        let file = File::create(&self.credentials_path).map_err(|e| AuthError::Storage {
            message: e.to_string(),
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, credentials).map_err(|e| AuthError::Storage {
            message: e.to_string(),
        })?;
        writer.flush().map_err(|e| AuthError::Storage {
            message: e.to_string(),
        })
    }

    /// Remove stored credentials. Missing file is not an error.
    pub fn clear(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.credentials_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::Storage {
                message: e.to_string(),
            }),
        }
    }
}
