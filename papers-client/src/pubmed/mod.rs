//! PubMed client for searching and fetching MEDLINE records
//!
//! This module talks to the ESearch and EFetch E-utilities endpoints.

pub mod client;
pub(crate) mod responses;

// Re-export public types
pub use client::{MAX_RETRIEVABLE, PubMedClient};
