//! Terminal rendering of report records

use papers_parser::ReportRecord;

/// Render records as labelled blocks separated by blank lines
///
/// # Example
///
/// ```
/// use papers_parser::ReportRecord;
/// use papers_report::render_console;
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
/// let text = render_console(&[record]);
/// assert!(text.starts_with("Title: A study\nPMID: 1\n"));
/// ```
pub fn render_console(records: &[ReportRecord]) -> String {
    records
        .iter()
        .map(|record| {
            format!(
                "Title: {}\nPMID: {}\nPublication Date: {}\nNon-academic Authors: {}\n\
                 Company Affiliations: {}\nEmail: {}\n",
                record.title,
                record.pmid,
                record.publication_date,
                record.non_academic_authors,
                record.company_affiliations,
                record.corresponding_email,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
