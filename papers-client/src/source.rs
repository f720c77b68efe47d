//! The seam between the report pipeline and the literature database

use async_trait::async_trait;
use papers_parser::ArticleRecord;

use crate::error::Result;
use crate::pubmed::PubMedClient;

/// A literature database that can be searched and read
///
/// [`pipeline::run`](crate::pipeline::run) only talks to this trait, so it
/// can be driven by [`PubMedClient`] or by an in-memory source in tests.
/// Implementations own their transport policy; errors are passed through
/// untouched.
#[async_trait]
pub trait LiteratureSource: Send + Sync {
    /// Return up to `max_results` article identifiers matching `query`
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>>;

    /// Return the metadata records for the given identifiers
    async fn fetch_metadata(&self, ids: &[String]) -> Result<Vec<ArticleRecord>>;
}

#[async_trait]
impl LiteratureSource for PubMedClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        self.search_articles(query, max_results).await
    }

    async fn fetch_metadata(&self, ids: &[String]) -> Result<Vec<ArticleRecord>> {
        self.fetch_medline(ids).await
    }
}
