//! Driftnet main entry point
//!
//! Command-line interface for the driftnet contact-discovery crawler.

use clap::Parser;
use driftnet::config::{load_config, Config};
use driftnet::crawler::execute;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Driftnet: a contact-discovery crawler
///
/// Driftnet crawls a seeded set of pages breadth-first, harvesting contact
/// email addresses, social-media profile links, and new same-site pages
/// worth visiting, until the frontier is exhausted.
#[derive(Parser, Debug)]
#[command(name = "driftnet")]
#[command(version)]
#[command(about = "A contact-discovery web crawler", long_about = None)]
struct Cli {
    /// Path to the seed file (one URL per line)
    #[arg(value_name = "SEEDS")]
    seeds: PathBuf,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    execute(&cli.seeds, &config).await?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("driftnet=info,warn"),
            1 => EnvFilter::new("driftnet=debug,info"),
            2 => EnvFilter::new("driftnet=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
