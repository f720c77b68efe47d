//! Orchestration tests for `pipeline::run` against an in-memory source

use std::sync::Mutex;

use async_trait::async_trait;
use papers_client::{
    AffiliationField, ArticleRecord, LiteratureSource, PubMedError, Result, RunOutcome, pipeline,
};
use tracing_test::traced_test;

/// Records every call so tests can check what the pipeline asked for
#[derive(Default)]
struct FakeSource {
    ids: Vec<String>,
    articles: Vec<ArticleRecord>,
    fail_fetch: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    fn new(ids: &[&str], articles: Vec<ArticleRecord>) -> Self {
        Self {
            ids: ids.iter().map(|s| s.to_string()).collect(),
            articles,
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LiteratureSource for FakeSource {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("search:{query}:{max_results}"));
        Ok(self.ids.iter().take(max_results).cloned().collect())
    }

    async fn fetch_metadata(&self, ids: &[String]) -> Result<Vec<ArticleRecord>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("fetch:{}", ids.join(",")));
        if self.fail_fetch {
            return Err(PubMedError::ApiError {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }
        Ok(self.articles.clone())
    }
}

fn article(pmid: &str, authors: &[&str], affiliations: &[&str]) -> ArticleRecord {
    ArticleRecord {
        pmid: Some(pmid.to_string()),
        title: Some(format!("Title {pmid}")),
        publication_date: Some("2024".to_string()),
        authors: authors.iter().map(|s| s.to_string()).collect(),
        affiliations: AffiliationField::List(affiliations.iter().map(|s| s.to_string()).collect()),
    }
}

#[tokio::test]
#[traced_test]
async fn test_empty_search_does_not_fetch() {
    let source = FakeSource::new(&[], vec![]);

    let outcome = pipeline::run(&source, "nothing", 5).await.unwrap();

    assert_eq!(outcome, RunOutcome::NoResults);
    assert_eq!(source.calls(), vec!["search:nothing:5"]);
}

#[tokio::test]
#[traced_test]
async fn test_no_qualifying_articles() {
    let source = FakeSource::new(
        &["1", "2"],
        vec![
            article("1", &["Smith J"], &["Harvard University"]),
            article("2", &["Doe A"], &["Karolinska Institute"]),
        ],
    );

    let outcome = pipeline::run(&source, "cancer", 5).await.unwrap();

    assert_eq!(
        outcome,
        RunOutcome::NoQualifyingArticles {
            pmids: vec!["1".to_string(), "2".to_string()],
        }
    );
    assert!(outcome.records().is_empty());
    assert_eq!(source.calls(), vec!["search:cancer:5", "fetch:1,2"]);
}

#[tokio::test]
#[traced_test]
async fn test_report_for_qualifying_articles() {
    let source = FakeSource::new(
        &["1", "2", "3"],
        vec![
            article(
                "1",
                &["Smith J", "Doe A"],
                &["Dept of Medicine, Yale University", "Pfizer Inc."],
            ),
            article("2", &["Roe R"], &["University of Tokyo"]),
            article("3", &["Poe E"], &["Bayer AG, Leverkusen. e.poe@bayer.com"]),
        ],
    );

    let outcome = pipeline::run(&source, "oncology", 3).await.unwrap();

    let records = outcome.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].pmid, "1");
    assert_eq!(records[0].non_academic_authors, "Doe A");
    assert_eq!(records[0].company_affiliations, "Pfizer Inc.");
    assert_eq!(records[0].corresponding_email, "N/A");
    assert_eq!(records[1].pmid, "3");
    assert_eq!(records[1].corresponding_email, "e.poe@bayer.com");
    assert_eq!(outcome.pmids(), ["1", "2", "3"]);
}

#[tokio::test]
#[traced_test]
async fn test_max_results_is_passed_to_search() {
    let source = FakeSource::new(&["1", "2", "3"], vec![]);

    let outcome = pipeline::run(&source, "q", 2).await.unwrap();

    assert_eq!(source.calls(), vec!["search:q:2", "fetch:1,2"]);
    assert_eq!(outcome.pmids(), ["1", "2"]);
}

#[tokio::test]
#[traced_test]
async fn test_zero_max_results_rejected() {
    let source = FakeSource::new(&["1"], vec![]);

    let result = pipeline::run(&source, "q", 0).await;

    assert!(matches!(result, Err(PubMedError::InvalidQuery(_))));
    assert!(source.calls().is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_fetch_failure_propagates() {
    let source = FakeSource {
        fail_fetch: true,
        ..FakeSource::new(&["1"], vec![])
    };

    let result = pipeline::run(&source, "q", 1).await;

    assert!(matches!(
        result,
        Err(PubMedError::ApiError { status: 503, .. })
    ));
}

#[tokio::test]
#[traced_test]
async fn test_trait_object_source() {
    let source: Box<dyn LiteratureSource> = Box::new(FakeSource::new(
        &["9"],
        vec![article("9", &["Lee K"], &["Samsung Biologics, Incheon"])],
    ));

    let outcome = pipeline::run(source.as_ref(), "q", 1).await.unwrap();

    assert_eq!(outcome.records().len(), 1);
}
