#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Papers Parser
//!
//! MEDLINE text parser and data models for get-papers-list.
//!
//! This crate turns the `rettype=medline` output of NCBI EFetch into
//! [`ArticleRecord`]s and defines the [`ReportRecord`] rows produced for
//! articles with industry-affiliated authors. It has no network dependencies
//! and can be used independently of any HTTP client.
//!
//! ## Example
//!
//! ```
//! use papers_parser::parse_medline;
//!
//! let text = "PMID- 123\nTI  - A study\nFAU - Doe, Jane\nAD  - Pfizer Inc., New York\n";
//! let records = parse_medline(text);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].pmid.as_deref(), Some("123"));
//! assert_eq!(records[0].authors, vec!["Doe, Jane".to_string()]);
//! ```

pub mod pubmed;

// Re-export main types for convenience
pub use pubmed::{
    AffiliationField, ArticleRecord, MedlineTag, NOT_AVAILABLE, ReportRecord, parse_medline,
};
