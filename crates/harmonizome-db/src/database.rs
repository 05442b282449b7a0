//! The Harmonizome annotation database
//!
//! Gene records are fetched from `{api}/gene/{NAME}` and flattened into one
//! `key: value` line per field. Detailed information is shown by opening the
//! gene page on the Harmonizome website.

use crate::api::{endpoints, AnnotationRecord, ApiClient, ServiceEndpoint};
use crate::browser::{BrowserOpener, SystemBrowser};
use crate::error::{AnnotationError, Result};
use crate::host::{
    AnnotationContext, AnnotationDatabase, AnnotationSummary, AnnotationType, DatabaseMethod,
    Session,
};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

/// Name the database registers under in the host
pub const DATABASE_NAME: &str = "mRNA";

const METHODS: &[DatabaseMethod] = &[DatabaseMethod::Get];

/// Annotation database backed by the Harmonizome server
/// (Ma'ayan lab, <https://maayanlab.cloud/Harmonizome>).
pub struct HarmonizomeDatabase {
    endpoint: ServiceEndpoint,
    client: ApiClient,
    browser: Box<dyn BrowserOpener>,
}

impl HarmonizomeDatabase {
    /// Create the database for the public Harmonizome server.
    ///
    /// `session` is accepted to match the host constructor and is not used.
    pub fn new(session: Option<&dyn Session>) -> Result<Self> {
        let _ = session;
        Self::with_endpoint(ServiceEndpoint::default())
    }

    /// Create the database against a specific server
    pub fn with_endpoint(endpoint: ServiceEndpoint) -> Result<Self> {
        debug!(api_url = %endpoint.api_url(), "Using Harmonizome server");
        let client = ApiClient::new(endpoint.api_url())?;

        Ok(Self {
            endpoint,
            client,
            browser: Box::new(SystemBrowser),
        })
    }

    /// Replace the browser used by [`Self::open_in_browser`]
    pub fn with_browser(mut self, browser: Box<dyn BrowserOpener>) -> Self {
        self.browser = browser;
        self
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    /// Underlying request helpers, for API calls beyond gene lookup
    pub fn api(&self) -> &ApiClient {
        &self.client
    }

    /// Annotation lines for a gene name. Names are upper-cased before lookup.
    ///
    /// A non-200 answer has already been logged by the client and yields an
    /// empty list.
    pub async fn query(&self, sequence: &str) -> Result<Vec<String>> {
        let gene = sequence.to_uppercase();
        let response = self.client.get(&endpoints::gene_path(&gene), None).await?;

        if !response.is_ok() {
            return Ok(Vec::new());
        }

        let info: AnnotationRecord = response.json()?;
        Ok(format_record(&info))
    }

    /// [`Self::query`] with each line tagged by its gene
    pub async fn summarize(&self, sequence: &str) -> Result<Vec<AnnotationSummary>> {
        let gene = sequence.to_uppercase();
        let summaries = self
            .query(&gene)
            .await?
            .into_iter()
            .map(|summary| AnnotationSummary {
                context: AnnotationContext::new(AnnotationType::Other, gene.clone()),
                summary,
            })
            .collect();

        Ok(summaries)
    }

    /// Website page for a gene
    pub fn gene_page_url(&self, sequence: &str) -> String {
        endpoints::gene_page_url(self.endpoint.website_url(), sequence)
    }

    /// Open the gene page named by the record's `sequence` field
    pub fn open_in_browser(&self, annotation: &AnnotationRecord) -> Result<()> {
        let sequence = match annotation.get("sequence") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => return Err(AnnotationError::missing_field("sequence")),
            Some(other) => other.to_string(),
        };

        let url = self.gene_page_url(&sequence);
        info!(url = %url, "Opening Harmonizome gene page");

        self.browser
            .open(&url)
            .map_err(|e| AnnotationError::browser(url, e))
    }
}

/// One `key: value` line per record field, in record order.
///
/// Strings print bare; any other value prints as compact JSON.
pub fn format_record(info: &AnnotationRecord) -> Vec<String> {
    info.iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{}: {}", key, s),
            other => format!("{}: {}", key, other),
        })
        .collect()
}

#[async_trait]
impl AnnotationDatabase for HarmonizomeDatabase {
    fn name(&self) -> &str {
        DATABASE_NAME
    }

    fn methods(&self) -> &[DatabaseMethod] {
        METHODS
    }

    async fn get_seq_annotations(&self, sequence: &str) -> Result<Vec<String>> {
        self.query(sequence).await
    }

    async fn get_seq_annotation_strings(&self, sequence: &str) -> Result<Vec<AnnotationSummary>> {
        self.summarize(sequence).await
    }

    fn get_annotation_string(&self, info: &AnnotationRecord) -> Vec<String> {
        format_record(info)
    }

    fn show_annotation_info(&self, annotation: &AnnotationRecord) -> Result<()> {
        self.open_in_browser(annotation)
    }
}
