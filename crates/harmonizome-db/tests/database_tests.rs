//! Integration tests for the Harmonizome database plugin
//!
//! Run against a wiremock server standing in for the Harmonizome API.

use harmonizome_common::logging::{subscriber, LogConfig, LogLevel};
use harmonizome_db::{
    AnnotationDatabase, AnnotationError, AnnotationRecord, AnnotationType, BrowserOpener,
    HarmonizomeDatabase, ServiceEndpoint,
};
use serde_json::{json, Value};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const WEBSITE: &str = "https://maayanlab.cloud/Harmonizome";

/// Browser that remembers what it was asked to open
#[derive(Clone, Default)]
struct RecordingBrowser {
    opened: Arc<Mutex<Vec<String>>>,
}

impl BrowserOpener for RecordingBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

struct BrokenBrowser;

impl BrowserOpener for BrokenBrowser {
    fn open(&self, _url: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
    }
}

/// In-memory log sink
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn database_for(server: &MockServer) -> HarmonizomeDatabase {
    HarmonizomeDatabase::with_endpoint(ServiceEndpoint::new(server.uri(), WEBSITE)).unwrap()
}

fn record(value: Value) -> AnnotationRecord {
    value.as_object().cloned().unwrap()
}

async fn mount_gene(server: &MockServer, gene: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/gene/{}", gene)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ============================================================================
// Lookup
// ============================================================================

#[tokio::test]
async fn test_query_returns_lines_in_response_order() {
    let server = MockServer::start().await;
    mount_gene(&server, "GENE1", json!({"A": 1, "B": 2})).await;

    let db = database_for(&server);
    let lines = db.query("GENE1").await.unwrap();

    assert_eq!(lines, vec!["A: 1", "B: 2"]);
}

#[tokio::test]
async fn test_query_keeps_unsorted_key_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gene/TP53"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"symbol": "TP53", "name": "tumor protein p53", "ncbiEntrezGeneId": 7157}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let db = database_for(&server);
    let lines = db.query("TP53").await.unwrap();

    assert_eq!(
        lines,
        vec!["symbol: TP53", "name: tumor protein p53", "ncbiEntrezGeneId: 7157"]
    );
}

#[tokio::test]
async fn test_query_upper_cases_gene_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gene/BRCA1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"symbol": "BRCA1"})))
        .expect(1)
        .mount(&server)
        .await;

    let db = database_for(&server);
    let lines = db.query("brca1").await.unwrap();

    assert_eq!(lines, vec!["symbol: BRCA1"]);
}

#[tokio::test]
async fn test_query_not_found_is_empty_and_warns() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gene/NOPE"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gene not found"))
        .mount(&server)
        .await;

    let logs = LogBuffer::default();
    let config = LogConfig::builder().level(LogLevel::Warn).build();
    let _guard = tracing::subscriber::set_default(subscriber(&config, logs.clone()).unwrap());

    let db = database_for(&server);
    let lines = db.query("nope").await.unwrap();

    assert!(lines.is_empty());
    let output = logs.contents();
    assert!(output.contains("WARN"));
    assert!(output.contains("Not Found"));
    assert!(output.contains("gene/NOPE"));
    assert!(output.contains("gene not found"));
}

#[tokio::test]
async fn test_query_server_error_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let db = database_for(&server);
    assert!(db.query("TP53").await.unwrap().is_empty());
    assert!(db.summarize("TP53").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_query_non_object_body_is_parse_error() {
    let server = MockServer::start().await;
    mount_gene(&server, "TP53", json!(["not", "a", "record"])).await;

    let db = database_for(&server);
    let err = db.query("TP53").await.unwrap_err();

    assert!(matches!(err, AnnotationError::JsonParse(_)));
}

#[tokio::test]
async fn test_query_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gene/TP53"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let db = database_for(&server);
    assert!(matches!(
        db.query("TP53").await.unwrap_err(),
        AnnotationError::JsonParse(_)
    ));
}

#[tokio::test]
async fn test_query_transport_failure_propagates() {
    // Bind then drop a listener so the port is known to be closed
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let uri = format!("http://{}", addr);

    let db = HarmonizomeDatabase::with_endpoint(ServiceEndpoint::new(uri, WEBSITE)).unwrap();
    assert!(matches!(
        db.query("TP53").await.unwrap_err(),
        AnnotationError::Http(_)
    ));
}

// ============================================================================
// Summaries
// ============================================================================

#[tokio::test]
async fn test_summarize_tags_every_line() {
    let server = MockServer::start().await;
    mount_gene(&server, "ABC", json!({"symbol": "ABC", "name": "some gene", "id": 1})).await;

    let db = database_for(&server);
    let summaries = db.summarize("abc").await.unwrap();

    assert_eq!(summaries.len(), 3);
    for summary in &summaries {
        assert_eq!(summary.context.sequence, "ABC");
        assert_eq!(summary.context.annotationtype, AnnotationType::Other);
    }
    assert_eq!(summaries[1].summary, "name: some gene");

    let as_dict = serde_json::to_value(&summaries[0].context).unwrap();
    assert_eq!(as_dict, json!({"annotationtype": "other", "sequence": "ABC"}));
}

// ============================================================================
// Browser
// ============================================================================

#[test]
fn test_open_in_browser_uses_website_url() {
    let browser = RecordingBrowser::default();
    let db = HarmonizomeDatabase::new(None)
        .unwrap()
        .with_browser(Box::new(browser.clone()));

    db.open_in_browser(&record(json!({"sequence": "TP53"}))).unwrap();

    assert_eq!(
        *browser.opened.lock().unwrap(),
        vec!["https://maayanlab.cloud/Harmonizome/gene/TP53".to_string()]
    );
}

#[test]
fn test_open_in_browser_failure_is_reported() {
    let db = HarmonizomeDatabase::new(None)
        .unwrap()
        .with_browser(Box::new(BrokenBrowser));

    let err = db
        .open_in_browser(&record(json!({"sequence": "TP53"})))
        .unwrap_err();

    match err {
        AnnotationError::Browser { url, .. } => {
            assert_eq!(url, "https://maayanlab.cloud/Harmonizome/gene/TP53")
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Host dispatch
// ============================================================================

#[tokio::test]
async fn test_host_registry_dispatch() {
    let server = MockServer::start().await;
    mount_gene(&server, "TP53", json!({"symbol": "TP53"})).await;

    let browser = RecordingBrowser::default();
    let registry: Vec<Box<dyn AnnotationDatabase>> =
        vec![Box::new(database_for(&server).with_browser(Box::new(browser.clone())))];

    let db = registry.iter().find(|db| db.name() == "mRNA").unwrap();

    assert_eq!(db.get_seq_annotations("tp53").await.unwrap(), vec!["symbol: TP53"]);

    let summaries = db.get_seq_annotation_strings("tp53").await.unwrap();
    assert_eq!(summaries[0].context.sequence, "TP53");

    assert_eq!(
        db.get_annotation_string(&record(json!({"k": "v"}))),
        vec!["k: v"]
    );

    db.show_annotation_info(&record(json!({"sequence": "TP53"})))
        .unwrap();
    assert_eq!(
        *browser.opened.lock().unwrap(),
        vec![format!("{}/gene/TP53", WEBSITE)]
    );
}

#[tokio::test]
async fn test_post_helper_warns_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/enrichment"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad genes"))
        .expect(1)
        .mount(&server)
        .await;

    let logs = LogBuffer::default();
    let config = LogConfig::builder().level(LogLevel::Warn).build();
    let _guard = tracing::subscriber::set_default(subscriber(&config, logs.clone()).unwrap());

    let db = database_for(&server);
    let response = db
        .api()
        .post("enrichment", &json!({"genes": ["TP53"]}))
        .await
        .unwrap();

    assert!(!response.is_ok());
    let output = logs.contents();
    assert!(output.contains("Bad Request"));
    assert!(output.contains("bad genes"));
}
