//! opsdesk: a terminal admin console for the CRM backend.
//!
//! Browse leads, projects, and users as paginated tables, edit and
//! delete user accounts, and sign in against the backend's auth
//! endpoints. All remote I/O runs on background tasks; the UI thread
//! only applies completion messages.

pub mod adapters;
pub mod api;
pub mod app;
pub mod auth;
pub mod error;
pub mod events;
pub mod models;
pub mod paging;
pub mod state;
pub mod traits;
pub mod ui;
