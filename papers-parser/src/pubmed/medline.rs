//! Parser for the MEDLINE text format returned by EFetch with `rettype=medline`
//!
//! A MEDLINE response is a sequence of records separated by blank lines. Each
//! field starts with a tag padded to four columns, a dash and a space
//! (`FAU - Doe, Jane`). Values that wrap continue on lines indented by six
//! spaces.

use crate::pubmed::models::{AffiliationField, ArticleRecord};
use crate::pubmed::tags::MedlineTag;
use tracing::{debug, instrument};

/// Width of the tag column including the `- ` separator
const CONTINUATION_INDENT: &str = "      ";

/// Parse every record in a MEDLINE text response
///
/// Unknown tags are ignored and lines that are neither a field nor a
/// continuation are skipped. Records without any recognised field are
/// dropped.
///
/// # Example
///
/// ```
/// use papers_parser::{AffiliationField, parse_medline};
///
/// let text = "\
/// PMID- 1
/// TI  - First
///
/// PMID- 2
/// TI  - Second title that wraps
///       onto the next line
/// FAU - Smith, John
/// AD  - Novartis, Basel
/// ";
///
/// let records = parse_medline(text);
/// assert_eq!(records.len(), 2);
/// assert!(records[0].affiliations.is_missing());
/// assert_eq!(
///     records[1].title.as_deref(),
///     Some("Second title that wraps onto the next line")
/// );
/// assert_eq!(
///     records[1].affiliations,
///     AffiliationField::List(vec!["Novartis, Basel".to_string()])
/// );
/// ```
#[instrument(skip(text), fields(text_size = text.len()))]
pub fn parse_medline(text: &str) -> Vec<ArticleRecord> {
    let mut records = Vec::new();
    let mut fields: Vec<(MedlineTag, String)> = Vec::new();
    // Index of the field a continuation line extends; None after an unknown tag
    let mut open_field: Option<usize> = None;

    for (line_number, line) in text.lines().enumerate() {
        // Checked before trimming so a whitespace-only continuation stays in its record
        if let Some(rest) = line.strip_prefix(CONTINUATION_INDENT) {
            let rest = rest.trim();
            if let Some(idx) = open_field {
                if !rest.is_empty() {
                    let value = &mut fields[idx].1;
                    value.push(' ');
                    value.push_str(rest);
                }
            }
            continue;
        }

        let line = line.trim_end();

        if line.is_empty() {
            if let Some(record) = build_record(&mut fields) {
                records.push(record);
            }
            open_field = None;
            continue;
        }

        match split_on_dash(line) {
            Some((key, value)) => match MedlineTag::from_tag(key) {
                Some(tag) => {
                    fields.push((tag, value.to_string()));
                    open_field = Some(fields.len() - 1);
                }
                None => open_field = None,
            },
            None => {
                debug!(line_number = line_number + 1, "Skipping unparsable MEDLINE line");
                open_field = None;
            }
        }
    }

    if let Some(record) = build_record(&mut fields) {
        records.push(record);
    }

    debug!(records = records.len(), "Parsed MEDLINE records");
    records
}

/// Split a field line into its tag and value.
///
/// The tag must be at most four upper-case letters or digits; anything else
/// is not a field line.
fn split_on_dash(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('-')?;
    let key = key.trim_end();
    let is_tag = !key.is_empty()
        && key.len() <= 4
        && key
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    is_tag.then(|| (key, value.trim_start()))
}

/// Drain the collected fields of one record into an [`ArticleRecord`]
fn build_record(fields: &mut Vec<(MedlineTag, String)>) -> Option<ArticleRecord> {
    if fields.is_empty() {
        return None;
    }

    let mut record = ArticleRecord::default();
    let mut affiliations: Vec<String> = Vec::new();

    for (tag, value) in fields.drain(..) {
        match tag {
            MedlineTag::Pmid => append_single(&mut record.pmid, value),
            MedlineTag::Title => append_single(&mut record.title, value),
            MedlineTag::PublicationDate => append_single(&mut record.publication_date, value),
            MedlineTag::FullAuthor => record.authors.push(value),
            MedlineTag::Affiliation => affiliations.push(value),
        }
    }

    if !affiliations.is_empty() {
        record.affiliations = AffiliationField::List(affiliations);
    }

    Some(record)
}

/// Repeated single-valued fields are joined with a space
fn append_single(slot: &mut Option<String>, value: String) {
    match slot {
        Some(existing) => {
            existing.push(' ');
            existing.push_str(&value);
        }
        None => *slot = Some(value),
    }
}
