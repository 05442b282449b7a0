//! Query command implementation

use crate::error::Result;
use harmonizome_db::AnnotationDatabase;
use tracing::info;

/// Print one `key: value` line per annotation field
pub async fn run(db: &dyn AnnotationDatabase, gene: &str) -> Result<()> {
    info!(gene = %gene, database = %db.name(), "Querying annotations");

    let lines = db.get_seq_annotations(gene).await?;
    if lines.is_empty() {
        super::report_empty(gene);
        return Ok(());
    }

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
