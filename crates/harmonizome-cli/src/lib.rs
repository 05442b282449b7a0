//! Harmonizome CLI Library
//!
//! A small host for the Harmonizome database plugin: each subcommand drives
//! one of the plugin's host callbacks and prints the result.
//!
//! - **Lookup**: annotation lines for a gene (`harmonizome query`)
//! - **Summaries**: lines tagged with their context (`harmonizome summary`)
//! - **Browser**: open the gene page (`harmonizome open`)
//! - **Info**: registered name, methods, and endpoints (`harmonizome info`)

pub mod commands;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::{CliError, Result};

use clap::{Parser, Subcommand, ValueEnum};
use harmonizome_common::logging::{LogConfig, LogLevel};

/// Harmonizome gene annotation lookup
#[derive(Parser, Debug)]
#[command(name = "harmonizome")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Harmonizome REST API root (overrides HARMONIZOME_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Harmonizome website root (overrides HARMONIZOME_WEBSITE_URL)
    #[arg(long, global = true)]
    pub website_url: Option<String>,

    /// Print the CLI reference as Markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print annotation lines for a gene
    Query {
        /// Gene symbol, case-insensitive (e.g. tp53)
        gene: String,
    },

    /// Print annotation lines tagged with their context
    Summary {
        /// Gene symbol, case-insensitive
        gene: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Open the Harmonizome page of a gene
    Open {
        /// Gene symbol as it should appear in the page URL
        gene: String,

        /// Print the URL instead of launching a browser
        #[arg(long)]
        print: bool,
    },

    /// Show the database name, methods, and endpoints
    Info {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output formats for `summary` and `info`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Logging setup for a run: debug with `--verbose`, warnings otherwise,
/// then `HARMONIZOME_LOG_*` overrides. A malformed override is an error.
pub fn log_config(verbose: bool) -> Result<LogConfig> {
    let level = if verbose { LogLevel::Debug } else { LogLevel::Warn };
    Ok(LogConfig::builder().level(level).build().merge_env()?)
}
