//! Harmonizome database plugin
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Looks up gene annotations on the [Harmonizome](https://maayanlab.cloud/Harmonizome)
//! service and renders them as short strings for an analysis host.
//!
//! # Overview
//!
//! - **Host contract**: [`host::AnnotationDatabase`] is the interface a host
//!   calls; [`HarmonizomeDatabase`] implements it
//! - **REST access**: [`api::ApiClient`] issues GET/POST calls against the
//!   Harmonizome API and logs non-success responses
//! - **Browser**: [`browser::BrowserOpener`] opens the gene page for a record
//!
//! # Example
//!
//! ```no_run
//! use harmonizome_db::{AnnotationDatabase, HarmonizomeDatabase};
//!
//! #[tokio::main]
//! async fn main() -> harmonizome_db::Result<()> {
//!     let db = HarmonizomeDatabase::new(None)?;
//!     for line in db.get_seq_annotations("tp53").await? {
//!         println!("{}", line);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod browser;
pub mod database;
pub mod error;
pub mod host;

pub use api::{AnnotationRecord, ServiceEndpoint};
pub use browser::{BrowserOpener, SystemBrowser};
pub use database::{format_record, HarmonizomeDatabase, DATABASE_NAME};
pub use error::{AnnotationError, Result};
pub use host::{
    AnnotationContext, AnnotationDatabase, AnnotationSummary, AnnotationType, DatabaseMethod, Session,
};
