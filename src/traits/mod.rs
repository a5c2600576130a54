//! Trait abstractions for external collaborators.
//!
//! Traits at this seam keep the application logic independent of the
//! concrete HTTP stack; production adapters live in `crate::adapters`.

mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
