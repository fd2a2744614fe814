//! Deliver CLI - Query Kentico Cloud content items.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{run_items, run_query};

/// Log to stderr so stdout stays clean for table/JSON output. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "warn,kentico_deliver_api=debug,deliver=debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_env_filter(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Items(args) => {
            run_items(&args, cli.format).await?;
        }
        Commands::Query(args) => {
            run_query(&args, cli.format)?;
        }
    }

    Ok(())
}
