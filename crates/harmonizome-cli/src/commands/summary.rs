//! Summary command implementation
//!
//! Text output puts the context in front of each line; JSON output is the
//! host's list of `{context, summary}` pairs.

use crate::error::Result;
use crate::OutputFormat;
use colored::Colorize;
use harmonizome_db::{AnnotationDatabase, AnnotationSummary};
use tracing::info;

pub async fn run(db: &dyn AnnotationDatabase, gene: &str, format: OutputFormat) -> Result<()> {
    info!(gene = %gene, format = ?format, "Summarizing annotations");

    let summaries = db.get_seq_annotation_strings(gene).await?;

    match format {
        OutputFormat::Json => println!("{}", render_json(&summaries)?),
        OutputFormat::Text if summaries.is_empty() => super::report_empty(gene),
        OutputFormat::Text => {
            for summary in &summaries {
                println!(
                    "{} {}  {}",
                    format!("[{}]", summary.context.annotationtype).dimmed(),
                    summary.context.sequence.bold(),
                    summary.summary
                );
            }
        }
    }

    Ok(())
}

fn render_json(summaries: &[AnnotationSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}
