//! Authentication: sign-in, session context, credential persistence.
//!
//! The flow is: the login screen calls [`AuthClient::sign_in`]; on
//! success the returned [`CurrentUser`] becomes an [`AuthContext`] and is
//! persisted via [`CredentialsManager`]; sign-out drops the context and
//! clears the file.

mod api;
mod context;
pub mod credentials;

pub use api::AuthClient;
pub use context::{AuthContext, CurrentUser};
pub use credentials::{CredentialsManager, StoredCredentials};
