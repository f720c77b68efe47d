use std::{io, result};

use thiserror::Error;

/// Error types for writing reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// CSV serialization failed
    #[error("CSV writing failed: {0}")]
    Csv(#[from] csv::Error),

    /// IO error while creating or flushing the output file
    #[error("IO error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = result::Result<T, ReportError>;
