//! # get_papers_list
//!
//! PubMed search that flags non-academic (industry) authors and writes a CSV report.
//!
//! ## Modules
//!
//! - [`pubmed`] - E-utilities search and summary client
//! - [`affiliation`] - Academic / industry affiliation heuristic
//! - [`enrich`] - Per-identifier record construction
//! - [`report`] - CSV report writer
//! - [`pipeline`] - Search then enrich
//! - [`config`] - Client options
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use get_papers_list::{config::ClientOptions, pipeline, pubmed::PubMedClient, report};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PubMedClient::new(ClientOptions::default())?;
//!     let records = pipeline::get_papers_list(&client, "cancer immunotherapy").await?;
//!     report::write_report(&records, Path::new("papers.csv"))?;
//!     Ok(())
//! }
//! ```

pub mod affiliation;
pub mod config;
pub mod enrich;
pub mod error;
pub mod pipeline;
pub mod pubmed;
pub mod report;

pub use error::{PapersError, Result};
