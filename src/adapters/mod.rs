//! Concrete implementations of the trait abstractions.
//!
//! - [`ReqwestHttpClient`]: production HTTP client backed by reqwest
//! - [`mock`]: configurable mock client for tests

pub mod mock;
mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
