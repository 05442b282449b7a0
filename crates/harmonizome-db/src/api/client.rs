//! HTTP API client for Harmonizome
//!
//! Thin request helpers: they send, read the body, and warn on anything but
//! 200. Status failures are never turned into errors and nothing is retried.

use crate::api::endpoints;
use crate::api::types::RestResponse;
use crate::error::Result;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, warn};

/// API client for the Harmonizome REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("harmonizome-db/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// GET `{base}/{api}`, sending `payload` as a JSON body when given
    pub async fn get(&self, api: &str, payload: Option<&Value>) -> Result<RestResponse> {
        let url = endpoints::api_url(&self.base_url, api);
        debug!(url = %url, "GET");

        let mut request = self.client.get(&url);
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        self.send(api, request).await
    }

    /// POST `payload` as JSON to `{base}/{api}`
    pub async fn post(&self, api: &str, payload: &Value) -> Result<RestResponse> {
        let url = endpoints::api_url(&self.base_url, api);
        debug!(url = %url, "POST");

        self.send(api, self.client.post(&url).json(payload)).await
    }

    async fn send(&self, api: &str, request: RequestBuilder) -> Result<RestResponse> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        let response = RestResponse { status, body };
        if !response.is_ok() {
            warn!(
                status = status.as_u16(),
                "REST error {} encountered when accessing Harmonizome database {}: {}",
                response.reason(),
                api,
                response.body
            );
        } else {
            debug!(api = %api, bytes = response.body.len(), "Harmonizome response");
        }

        Ok(response)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
