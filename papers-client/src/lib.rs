#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Papers Client
//!
//! Finds PubMed articles that have at least one author working outside
//! academia.
//!
//! The crate has two halves:
//!
//! - **PubMed access**: [`PubMedClient`] searches with ESearch and fetches
//!   MEDLINE records with EFetch. It implements [`LiteratureSource`], the seam
//!   the rest of the crate talks to.
//! - **Industry filter**: [`industry`] classifies affiliations, extracts a
//!   contact email and assembles [`ReportRecord`]s; [`pipeline::run`] chains
//!   search, fetch and assembly.
//!
//! ## Quick Start
//!
//! ```no_run
//! use papers_client::{ClientConfig, PubMedClient, RunOutcome, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new().with_email("researcher@example.com");
//!     let client = PubMedClient::with_config(config)?;
//!
//!     match pipeline::run(&client, "cancer AND Pfizer", 5).await? {
//!         RunOutcome::Report { records, .. } => {
//!             for record in records {
//!                 println!("{}: {}", record.pmid, record.non_academic_authors);
//!             }
//!         }
//!         RunOutcome::NoResults => println!("No papers found"),
//!         RunOutcome::NoQualifyingArticles { .. } => println!("No industry authors"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod industry;
pub mod pipeline;
pub mod pubmed;
pub mod source;

// Re-export main types for convenience
pub use common::PubMedId;
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use industry::{assemble, extract_email, is_non_academic};
pub use papers_parser::{AffiliationField, ArticleRecord, NOT_AVAILABLE, ReportRecord};
pub use pipeline::RunOutcome;
pub use pubmed::PubMedClient;
pub use source::LiteratureSource;
