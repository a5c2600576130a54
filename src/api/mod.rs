//! Remote collection access.
//!
//! [`Resource`] names the collections the backend serves; the
//! [`CollectionClient`] issues the authenticated list/update/delete
//! requests against them.

mod client;
mod resource;

pub use client::CollectionClient;
pub use resource::Resource;

/// Default backend base URL; override with `OPSDESK_API_URL`.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
