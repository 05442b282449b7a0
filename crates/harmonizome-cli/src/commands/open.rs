//! Open command implementation

use crate::error::Result;
use harmonizome_db::{AnnotationDatabase, AnnotationRecord, HarmonizomeDatabase};
use serde_json::Value;

pub fn run(db: &HarmonizomeDatabase, gene: &str, print: bool) -> Result<()> {
    if print {
        println!("{}", db.gene_page_url(gene));
        return Ok(());
    }

    let mut annotation = AnnotationRecord::new();
    annotation.insert("sequence".to_string(), Value::String(gene.to_string()));

    db.show_annotation_info(&annotation)?;
    println!("Opened {}", db.gene_page_url(gene));

    Ok(())
}
