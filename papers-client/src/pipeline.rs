//! Search → fetch → assemble orchestration

use papers_parser::ReportRecord;
use tracing::{debug, info, instrument};

use crate::error::{PubMedError, Result};
use crate::industry::assemble;
use crate::source::LiteratureSource;

/// What a single run produced
///
/// Empty outcomes are reported states, not errors; the caller decides how to
/// present them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The search matched no articles; nothing was fetched
    NoResults,
    /// Articles were fetched but none has a non-academic author
    NoQualifyingArticles {
        /// Identifiers returned by the search
        pmids: Vec<String>,
    },
    /// Report rows for the qualifying articles, in fetch order
    Report {
        /// Identifiers returned by the search
        pmids: Vec<String>,
        records: Vec<ReportRecord>,
    },
}

impl RunOutcome {
    /// Report rows, empty unless the run produced a report
    pub fn records(&self) -> &[ReportRecord] {
        match self {
            RunOutcome::Report { records, .. } => records,
            RunOutcome::NoResults | RunOutcome::NoQualifyingArticles { .. } => &[],
        }
    }

    /// Identifiers returned by the search step
    pub fn pmids(&self) -> &[String] {
        match self {
            RunOutcome::NoResults => &[],
            RunOutcome::NoQualifyingArticles { pmids } | RunOutcome::Report { pmids, .. } => {
                pmids
            }
        }
    }
}

/// Search for `query`, fetch the matching articles and build the industry-author report
///
/// The steps run strictly one after the other. When the search returns no
/// identifiers the fetch step is skipped. Errors from `source` are returned
/// unchanged.
///
/// # Errors
///
/// * `PubMedError::InvalidQuery` - If `max_results` is zero
/// * any error returned by the source's `search` or `fetch_metadata`
#[instrument(skip(source), fields(query = %query, max_results = max_results))]
pub async fn run<S>(source: &S, query: &str, max_results: usize) -> Result<RunOutcome>
where
    S: LiteratureSource + ?Sized,
{
    if max_results == 0 {
        return Err(PubMedError::InvalidQuery(
            "max_results must be at least 1".to_string(),
        ));
    }

    let pmids = source.search(query, max_results).await?;
    debug!(?pmids, "Search results");

    if pmids.is_empty() {
        info!("No articles matched the query");
        return Ok(RunOutcome::NoResults);
    }

    let articles = source.fetch_metadata(&pmids).await?;
    let records = assemble(&articles);

    info!(
        fetched = articles.len(),
        qualifying = records.len(),
        "Found papers with non-academic authors"
    );

    if records.is_empty() {
        Ok(RunOutcome::NoQualifyingArticles { pmids })
    } else {
        Ok(RunOutcome::Report { pmids, records })
    }
}
