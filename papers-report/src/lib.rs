#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Papers Report
//!
//! Output formats for the industry-author report.
//!
//! - **CSV**: one row per qualifying article with a fixed header row
//! - **Console**: a readable block per article for terminal output
//!
//! Functions here build strings or write to a caller-supplied destination;
//! printing is left to the binary.

pub mod console;
pub mod csv_writer;
pub mod error;

// Re-export main types for convenience
pub use console::render_console;
pub use csv_writer::{CSV_HEADERS, write_csv, write_csv_file};
pub use error::{ReportError, Result};
