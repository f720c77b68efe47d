use papers_parser::{ArticleRecord, NOT_AVAILABLE, ReportRecord};
use tracing::debug;

use super::classify::is_non_academic;
use super::contact::extract_email;

/// An author paired with the affiliation at the same byline position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedAuthor<'a> {
    pub name: &'a str,
    pub affiliation: &'a str,
    pub non_academic: bool,
}

/// Pair authors with affiliations by position and classify each pair
///
/// Pairing stops at the shorter of the two lists, so authors without an
/// affiliation at their position (and surplus affiliations) are dropped.
pub fn classify_authors(record: &ArticleRecord) -> Vec<ClassifiedAuthor<'_>> {
    record
        .authors
        .iter()
        .zip(record.affiliations.normalize())
        .map(|(name, affiliation)| ClassifiedAuthor {
            name,
            affiliation,
            non_academic: is_non_academic(affiliation),
        })
        .collect()
}

/// Build a report row for an article, if it has a non-academic author
fn assemble_one(record: &ArticleRecord) -> Option<ReportRecord> {
    let (authors, affiliations): (Vec<&str>, Vec<&str>) = classify_authors(record)
        .into_iter()
        .filter(|author| author.non_academic)
        .map(|author| (author.name, author.affiliation))
        .unzip();

    if authors.is_empty() {
        return None;
    }

    Some(ReportRecord {
        pmid: record.pmid.clone().unwrap_or_default(),
        title: record
            .title
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        publication_date: record
            .publication_date
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        non_academic_authors: authors.join(", "),
        company_affiliations: affiliations.join("; "),
        // Searched across every affiliation, not only the non-academic ones
        corresponding_email: extract_email(&record.affiliations),
    })
}

/// Keep articles with at least one non-academic author and build their report rows
///
/// Output order follows input order. Missing fields fall back to defaults
/// (empty PMID, `"N/A"` title and date); nothing here fails.
///
/// # Example
///
/// ```
/// use papers_client::{AffiliationField, ArticleRecord, assemble};
///
/// let record = ArticleRecord {
///     pmid: Some("1".to_string()),
///     authors: vec!["Smith J".to_string(), "Doe A".to_string()],
///     affiliations: AffiliationField::List(vec![
///         "Dept of Medicine, Yale".to_string(),
///         "Pfizer Inc.".to_string(),
///     ]),
///     ..Default::default()
/// };
///
/// let report = assemble(&[record]);
/// assert_eq!(report.len(), 1);
/// assert_eq!(report[0].non_academic_authors, "Doe A");
/// assert_eq!(report[0].company_affiliations, "Pfizer Inc.");
/// ```
pub fn assemble(records: &[ArticleRecord]) -> Vec<ReportRecord> {
    let report: Vec<ReportRecord> = records.iter().filter_map(assemble_one).collect();
    debug!(
        input = records.len(),
        qualifying = report.len(),
        "Assembled report records"
    );
    report
}
