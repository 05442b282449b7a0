//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function that takes the
//! database through the host interface.

pub mod info;
pub mod open;
pub mod query;
pub mod summary;

use colored::Colorize;

/// Tell the user nothing came back, without failing the command
pub(crate) fn report_empty(gene: &str) {
    eprintln!(
        "{} No Harmonizome annotations found for '{}'.",
        "note:".yellow().bold(),
        gene.to_uppercase()
    );
}
