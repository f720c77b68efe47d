//! PubMed MEDLINE parsing and data models
//!
//! This module provides the parser for MEDLINE-formatted EFetch responses and
//! the data types that flow through the industry-author report.

pub mod medline;
pub mod models;
pub mod tags;

// Re-export public types
pub use medline::parse_medline;
pub use models::{AffiliationField, ArticleRecord, NOT_AVAILABLE, ReportRecord};
pub use tags::MedlineTag;
