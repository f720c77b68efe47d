//! CSV output for report records

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use papers_parser::ReportRecord;
use tracing::{info, instrument};

use crate::error::{ReportError, Result};

/// Header row; kept in step with the serialized field names of [`ReportRecord`]
pub const CSV_HEADERS: [&str; 6] = [
    "PMID",
    "Title",
    "Publication Date",
    "Non-academic Authors",
    "Company Affiliations",
    "Corresponding Author Email",
];

/// Write records as UTF-8 CSV to any writer
///
/// The header row is written even when `records` is empty.
///
/// # Example
///
/// ```
/// use papers_parser::ReportRecord;
/// use papers_report::write_csv;
///
/// let record = ReportRecord {
///     pmid: "1".to_string(),
///     title: "A study".to_string(),
///     publication_date: "2024".to_string(),
///     non_academic_authors: "Doe, Jane".to_string(),
///     company_affiliations: "Pfizer Inc.".to_string(),
///     corresponding_email: "N/A".to_string(),
/// };
///
/// let mut buffer = Vec::new();
/// write_csv(&[record], &mut buffer).unwrap();
///
/// let text = String::from_utf8(buffer).unwrap();
/// assert!(text.starts_with("PMID,Title,Publication Date,"));
/// assert!(text.contains("\"Doe, Jane\""));
/// ```
pub fn write_csv<W: Write>(records: &[ReportRecord], writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;

    Ok(())
}

/// Create (or truncate) `path` and write the records to it as CSV
#[instrument(skip(records, path), fields(path = %path.as_ref().display(), records = records.len()))]
pub fn write_csv_file<P: AsRef<Path>>(records: &[ReportRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ReportError::Io {
        path: path.display().to_string(),
        source,
    })?;

    write_csv(records, file)?;
    info!("Report written");

    Ok(())
}
