//! API response types
//!
//! Harmonizome records are passed through untouched, so the only local type
//! is the raw response the request helpers hand back.

use crate::error::Result;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// A record as returned by Harmonizome: field name to JSON value, in
/// response order.
pub type AnnotationRecord = serde_json::Map<String, serde_json::Value>;

/// Status and body of a completed request.
///
/// The body is read eagerly so that failures can be logged with it.
#[derive(Debug, Clone)]
pub struct RestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RestResponse {
    /// Only 200 counts as success; other 2xx codes are treated like failures.
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Reason phrase for the status, e.g. "Not Found"
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("Unknown Status")
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
