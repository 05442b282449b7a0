//! Info command implementation

use crate::error::Result;
use crate::OutputFormat;
use colored::Colorize;
use harmonizome_db::{AnnotationDatabase, DatabaseMethod, HarmonizomeDatabase};
use serde::Serialize;

/// What the database registers with the host, and where it points
#[derive(Debug, Serialize)]
struct InfoReport<'a> {
    name: &'a str,
    methods: &'a [DatabaseMethod],
    api_url: &'a str,
    website_url: &'a str,
}

pub fn run(db: &HarmonizomeDatabase, format: OutputFormat) -> Result<()> {
    let report = InfoReport {
        name: db.name(),
        methods: db.methods(),
        api_url: db.endpoint().api_url(),
        website_url: db.endpoint().website_url(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            let methods: Vec<&str> = report.methods.iter().map(|m| m.as_str()).collect();

            println!("{}: {}", "name".bold(), report.name);
            println!("{}: {}", "methods".bold(), methods.join(", "));
            println!("{}: {}", "api".bold(), report.api_url);
            println!("{}: {}", "website".bold(), report.website_url);
        }
    }

    Ok(())
}
