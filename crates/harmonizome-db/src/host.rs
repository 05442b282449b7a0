//! Host plugin contract
//!
//! An analysis host keeps a registry of annotation databases and calls into
//! them by these method names when it needs feature annotations. The types
//! here are the host's vocabulary; [`crate::HarmonizomeDatabase`] is one
//! implementation.

use crate::api::AnnotationRecord;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The host's analysis session, handed to databases at construction.
///
/// Databases may ignore it; Harmonizome does.
pub trait Session: Send + Sync {}

/// Capabilities a database can declare to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseMethod {
    /// Look up annotations for a sequence
    Get,
}

impl DatabaseMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            DatabaseMethod::Get => "get",
        }
    }
}

impl std::fmt::Display for DatabaseMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of annotation shown next to a sequence in the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationType {
    Other,
}

impl AnnotationType {
    pub fn as_str(self) -> &'static str {
        match self {
            AnnotationType::Other => "other",
        }
    }
}

impl std::fmt::Display for AnnotationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies which sequence an annotation string belongs to.
///
/// Serializes to the dictionary the host expects:
/// `{"annotationtype": "other", "sequence": "TP53"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationContext {
    pub annotationtype: AnnotationType,
    pub sequence: String,
}

impl AnnotationContext {
    pub fn new(annotationtype: AnnotationType, sequence: impl Into<String>) -> Self {
        Self {
            annotationtype,
            sequence: sequence.into(),
        }
    }
}

/// One line of annotation text together with its context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSummary {
    pub context: AnnotationContext,
    pub summary: String,
}

/// Interface the host uses to talk to an annotation database.
///
/// Method names follow the host's callback names so that a registry of
/// `Box<dyn AnnotationDatabase>` can be dispatched without translation.
#[async_trait]
pub trait AnnotationDatabase: Send + Sync {
    /// Name the database is registered under
    fn name(&self) -> &str;

    /// Capabilities this database offers
    fn methods(&self) -> &[DatabaseMethod];

    fn supports(&self, method: DatabaseMethod) -> bool {
        self.methods().contains(&method)
    }

    /// Annotation strings for a sequence, most important first
    async fn get_seq_annotations(&self, sequence: &str) -> Result<Vec<String>>;

    /// Annotation strings for a sequence, each paired with its context
    async fn get_seq_annotation_strings(&self, sequence: &str) -> Result<Vec<AnnotationSummary>>;

    /// Short summaries of one annotation record
    fn get_annotation_string(&self, info: &AnnotationRecord) -> Vec<String>;

    /// Show details for an annotation the host previously received
    fn show_annotation_info(&self, annotation: &AnnotationRecord) -> Result<()>;
}
