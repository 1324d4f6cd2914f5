//! get-papers-list - PubMed non-academic author report
//!
//! ## Usage
//!
//! ```bash
//! get-papers-list "cancer immunotherapy" -f results.csv --debug
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use get_papers_list::{config::ClientOptions, pipeline, pubmed::PubMedClient, report};
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Fetch research papers based on a query.
#[derive(Parser)]
#[command(name = "get-papers-list")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Search query for PubMed
    query: String,

    /// Output filename for CSV
    #[arg(short, long, default_value = "papers.csv")]
    file: PathBuf,

    /// Enable debug information
    #[arg(short, long)]
    debug: bool,

    /// E-utilities base URL
    #[arg(long, default_value = get_papers_list::config::EUTILS_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    timeout: Option<u64>,
}

/// Library progress events are only shown with `--debug`
fn default_log_level(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Stdout is reserved for the report messages.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(cli.debug).to_string()));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .init();

    let options = ClientOptions {
        base_url: cli.base_url,
        timeout: cli.timeout.map(Duration::from_secs),
        ..Default::default()
    };
    let client = PubMedClient::new(options).context("Failed to create PubMed client")?;

    if cli.debug {
        println!("Fetching papers for query: {}", cli.query);
    }

    let papers = pipeline::get_papers_list(&client, &cli.query)
        .await
        .context("Failed to fetch papers")?;

    if cli.debug {
        println!("Found {} papers.", papers.len());
    }

    report::write_report(&papers, &cli.file)
        .with_context(|| format!("Failed to write {}", cli.file.display()))?;

    println!("Saved results to {}", cli.file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["get-papers-list", "cancer"]);
        assert_eq!(cli.query, "cancer");
        assert_eq!(cli.file, PathBuf::from("papers.csv"));
        assert!(!cli.debug);
        assert!(cli.timeout.is_none());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["get-papers-list", "-f", "out.csv", "-d", "gene therapy"]);
        assert_eq!(cli.query, "gene therapy");
        assert_eq!(cli.file, PathBuf::from("out.csv"));
        assert!(cli.debug);
    }

    #[test]
    fn test_progress_logging_needs_debug() {
        assert_eq!(default_log_level(false), Level::WARN);
        assert_eq!(default_log_level(true), Level::DEBUG);
    }

    #[test]
    fn test_cli_requires_query() {
        assert!(Cli::try_parse_from(["get-papers-list"]).is_err());
    }
}
