//! Harmonizome endpoint URLs
//!
//! The REST API and the human-facing website live under different roots.

/// Root of the Harmonizome REST API.
pub const DEFAULT_API_URL: &str = "https://maayanlab.cloud/Harmonizome/api/1.0";

/// Root of the Harmonizome website.
pub const DEFAULT_WEBSITE_URL: &str = "https://maayanlab.cloud/Harmonizome";

/// Where the plugin talks to. Fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    api_url: String,
    website_url: String,
}

impl ServiceEndpoint {
    /// Build an endpoint from explicit roots. Trailing slashes are dropped.
    pub fn new(api_url: impl Into<String>, website_url: impl Into<String>) -> Self {
        Self {
            api_url: trim_root(api_url.into()),
            website_url: trim_root(website_url.into()),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn website_url(&self) -> &str {
        &self.website_url
    }
}

impl Default for ServiceEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_WEBSITE_URL)
    }
}

fn trim_root(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// Join an API path (e.g. `gene/TP53`) onto the API root
pub fn api_url(base_url: &str, api: &str) -> String {
    format!("{}/{}", base_url, api.trim_start_matches('/'))
}

/// API path of a gene record
pub fn gene_path(gene: &str) -> String {
    format!("gene/{}", urlencoding::encode(gene))
}

/// Website page of a gene
pub fn gene_page_url(website_url: &str, gene: &str) -> String {
    format!("{}/gene/{}", website_url, urlencoding::encode(gene))
}
