//! Error types for the Harmonizome CLI

use harmonizome_db::AnnotationError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// Lookup or browser failure from the database plugin
    #[error(transparent)]
    Annotation(#[from] AnnotationError),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check HARMONIZOME_API_URL / HARMONIZOME_WEBSITE_URL and the command-line flags.")]
    Config(String),

    /// Writing JSON output failed
    #[error("Failed to render JSON: {0}")]
    JsonRender(#[from] serde_json::Error),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
