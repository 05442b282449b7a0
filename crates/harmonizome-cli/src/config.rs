//! Configuration for the Harmonizome CLI
//!
//! Precedence: command-line flag, then environment, then the public
//! Harmonizome server.

use crate::error::{CliError, Result};
use harmonizome_db::api::{DEFAULT_API_URL, DEFAULT_WEBSITE_URL};
use harmonizome_db::ServiceEndpoint;

/// Environment variable overriding the REST API root
pub const ENV_API_URL: &str = "HARMONIZOME_API_URL";

/// Environment variable overriding the website root
pub const ENV_WEBSITE_URL: &str = "HARMONIZOME_WEBSITE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Harmonizome REST API root
    pub api_url: String,

    /// Harmonizome website root, used for gene pages
    pub website_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            website_url: DEFAULT_WEBSITE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_API_URL) {
            config.api_url = url;
        }

        if let Ok(url) = std::env::var(ENV_WEBSITE_URL) {
            config.website_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, api_url: Option<&str>, website_url: Option<&str>) -> Result<Self> {
        if let Some(url) = api_url {
            self.api_url = url.to_string();
        }

        if let Some(url) = website_url {
            self.website_url = url.to_string();
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        for (name, url) in [("API URL", &self.api_url), ("website URL", &self.website_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(CliError::config(format!(
                    "{} '{}' must start with http:// or https://",
                    name, url
                )));
            }
        }
        Ok(())
    }

    pub fn endpoint(&self) -> ServiceEndpoint {
        ServiceEndpoint::new(&self.api_url, &self.website_url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_WEBSITE_URL);
    }

    #[test]
    #[serial]
    fn test_defaults_to_public_server() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_url, "https://maayanlab.cloud/Harmonizome/api/1.0");
        assert_eq!(config.website_url, "https://maayanlab.cloud/Harmonizome");
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        std::env::set_var(ENV_API_URL, "http://localhost:9000/api/");
        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.api_url, "http://localhost:9000/api/");
        assert_eq!(config.endpoint().api_url(), "http://localhost:9000/api");
        assert_eq!(config.website_url, DEFAULT_WEBSITE_URL);
    }

    #[test]
    #[serial]
    fn test_flags_beat_env() {
        std::env::set_var(ENV_API_URL, "http://from-env");
        let config = Config::from_env()
            .unwrap()
            .with_overrides(Some("http://from-flag"), None)
            .unwrap();
        clear_env();

        assert_eq!(config.api_url, "http://from-flag");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = Config::default()
            .with_overrides(None, Some("ftp://example.org"))
            .unwrap_err();
        assert!(err.to_string().contains("website URL"));
    }
}
