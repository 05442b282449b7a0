//! Harmonizome CLI - Main entry point

use clap::Parser;
use harmonizome_cli::{Cli, Commands, Config};
use harmonizome_common::logging::init_logging;
use harmonizome_db::HarmonizomeDatabase;
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    let Some(ref command) = cli.command else {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    };

    let log_config = match harmonizome_cli::log_config(cli.verbose) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // The CLI works without logging
    let _ = init_logging(&log_config);

    if let Err(e) = execute_command(&cli, command).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn execute_command(cli: &Cli, command: &Commands) -> harmonizome_cli::Result<()> {
    let config = Config::from_env()?.with_overrides(cli.api_url.as_deref(), cli.website_url.as_deref())?;
    let db = HarmonizomeDatabase::with_endpoint(config.endpoint())?;

    match command {
        Commands::Query { gene } => harmonizome_cli::commands::query::run(&db, gene).await,
        Commands::Summary { gene, format } => {
            harmonizome_cli::commands::summary::run(&db, gene, *format).await
        }
        Commands::Open { gene, print } => harmonizome_cli::commands::open::run(&db, gene, *print),
        Commands::Info { format } => harmonizome_cli::commands::info::run(&db, *format),
    }
}
