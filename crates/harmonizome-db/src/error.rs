//! Error types for the Harmonizome plugin
//!
//! Non-success HTTP statuses are not errors here: they are logged and turn
//! into empty results. What remains are failures the host has to see.

use thiserror::Error;

/// Result type alias for plugin operations
pub type Result<T> = std::result::Result<T, AnnotationError>;

#[derive(Error, Debug)]
pub enum AnnotationError {
    /// Transport-level failure (DNS, connection refused, TLS, ...)
    #[error("Request to Harmonizome failed: {0}. Check your internet connection and the API URL.")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON object we expected
    #[error("Failed to parse Harmonizome response: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Annotation handed back by the host lacks a required field
    #[error("Annotation has no '{0}' field")]
    MissingField(String),

    /// Launching the system browser failed
    #[error("Could not open '{url}' in a browser: {source}")]
    Browser {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

impl AnnotationError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Create a browser launch error
    pub fn browser(url: impl Into<String>, source: std::io::Error) -> Self {
        Self::Browser {
            url: url.into(),
            source,
        }
    }
}
