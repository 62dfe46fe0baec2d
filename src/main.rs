//! meli-crawler - Cheapest-product search CLI for Mercado Libre México
//!
//! A Rust implementation of the classic "five cheapest listings" scraper.

use anyhow::Result;
use clap::Parser;
use meli_crawler::commands::SearchCommand;
use meli_crawler::config::{Config, OutputFormat};
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meli-crawler",
    version,
    about = "Finds the cheapest Mercado Libre México listings for a product",
    long_about = "Searches the Mercado Libre México listing page for a product, \
ranks the cheapest results, and writes them to a CSV file."
)]
struct Cli {
    /// Product to search for (prompted interactively when omitted)
    query: Option<String>,

    /// Target CSV file
    #[arg(short, long, env = "MELI_OUTPUT")]
    output: Option<PathBuf>,

    /// How many of the cheapest products to keep
    #[arg(short, long, env = "MELI_TOP")]
    top: Option<usize>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.format = cli.format;
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(top) = cli.top {
        config.top = top;
    }

    let query = match cli.query {
        Some(query) => query,
        None => prompt_query()?,
    };

    let cmd = SearchCommand::new(config);
    let output = cmd.execute(&query).await?;
    println!("{}", output);

    Ok(())
}

/// Reads the product query interactively from stdin.
fn prompt_query() -> Result<String> {
    print!("Producto a buscar: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
