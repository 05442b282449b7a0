//! API client module
//!
//! HTTP access to the Harmonizome REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::ApiClient;
pub use endpoints::{ServiceEndpoint, DEFAULT_API_URL, DEFAULT_WEBSITE_URL};
pub use types::*;
