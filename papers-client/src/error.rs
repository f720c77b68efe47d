use std::result;

use thiserror::Error;

/// Error types for PubMed client operations
///
/// "No results" and "no qualifying articles" are not errors; they are
/// reported through [`RunOutcome`](crate::RunOutcome).
#[derive(Error, Debug)]
pub enum PubMedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid PMID format
    #[error("Invalid PMID format: {pmid}")]
    InvalidPmid { pmid: String },

    /// Invalid query structure or parameters
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// This error is returned when a search requests more results than ESearch can return.
    #[error("Search limit exceeded: requested {requested}, maximum is {maximum}")]
    SearchLimitExceeded { requested: usize, maximum: usize },
}

pub type Result<T> = result::Result<T, PubMedError>;
