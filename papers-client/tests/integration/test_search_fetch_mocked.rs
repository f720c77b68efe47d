//! Integration tests for ESearch/EFetch using mocked HTTP responses
//!
//! These tests exercise the real `PubMedClient` against a wiremock server
//! that imitates the NCBI E-utilities endpoints.

use papers_client::{
    AffiliationField, ClientConfig, PubMedClient, PubMedError, RunOutcome, pipeline,
};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ESEARCH_TWO_IDS: &str = r#"{
    "header": {"type": "esearch", "version": "0.3"},
    "esearchresult": {
        "count": "2",
        "retmax": "2",
        "retstart": "0",
        "idlist": ["38012345", "38012346"],
        "querytranslation": "\"neoplasms\"[MeSH Terms] AND pfizer[All Fields]"
    }
}"#;

const ESEARCH_EMPTY: &str = r#"{
    "esearchresult": {"count": "0", "retmax": "0", "retstart": "0", "idlist": []}
}"#;

const ESEARCH_ERROR: &str = r#"{
    "esearchresult": {"ERROR": "Invalid query syntax"}
}"#;

const EFETCH_MEDLINE: &str = "
PMID- 38012345
OWN - NLM
DP  - 2023 Nov 28
TI  - Oncolytic virus therapy in solid tumours.
FAU - Smith, John
AU  - Smith J
AD  - Department of Oncology, Yale School of Medicine, New Haven, CT, USA.
FAU - Doe, Alice
AU  - Doe A
AD  - Pfizer Inc., 235 East 42nd Street, New York, NY, USA.
      Electronic address: alice.doe@pfizer.com.

PMID- 38012346
DP  - 2024 Jan
TI  - Academic-only study.
FAU - Roe, Richard
AD  - University of Cambridge, Cambridge, UK.
";

async fn mount_esearch(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "application/json"),
        )
        .mount(server)
        .await;
}

async fn mount_efetch(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/plain"),
        )
        .mount(server)
        .await;
}

fn create_mock_client(mock_server: &MockServer) -> PubMedClient {
    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_email("tester@example.com")
        .with_tool("papers-tests");

    PubMedClient::with_config(config).expect("client should build")
}

#[tokio::test]
#[traced_test]
async fn test_search_sends_query_and_identity() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("term", "cancer AND Pfizer"))
        .and(query_param("retmax", "5"))
        .and(query_param("retmode", "json"))
        .and(query_param("email", "tester@example.com"))
        .and(query_param("tool", "papers-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ESEARCH_TWO_IDS))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let pmids = client
        .search_articles("cancer AND Pfizer", 5)
        .await
        .expect("search should succeed");

    assert_eq!(pmids, vec!["38012345", "38012346"]);
}

#[tokio::test]
#[traced_test]
async fn test_search_error_field_becomes_api_error() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, ESEARCH_ERROR).await;

    let client = create_mock_client(&mock_server);
    let result = client.search_articles("((", 5).await;

    match result {
        Err(PubMedError::ApiError { status, message }) => {
            assert_eq!(status, 200);
            assert!(message.contains("Invalid query syntax"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
#[traced_test]
async fn test_http_error_status_is_reported() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let result = client.search_articles("cancer", 5).await;

    assert!(matches!(
        result,
        Err(PubMedError::ApiError { status: 429, .. })
    ));
}

#[tokio::test]
#[traced_test]
async fn test_malformed_search_json() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, "<html>not json</html>").await;

    let client = create_mock_client(&mock_server);
    let result = client.search_articles("cancer", 5).await;

    assert!(matches!(result, Err(PubMedError::JsonError(_))));
}

#[tokio::test]
#[traced_test]
async fn test_fetch_medline_single_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", "38012345,38012346"))
        .and(query_param("rettype", "medline"))
        .and(query_param("retmode", "text"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EFETCH_MEDLINE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let records = client
        .fetch_medline(&["38012345", "38012346"])
        .await
        .expect("fetch should succeed");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].pmid.as_deref(), Some("38012345"));
    assert_eq!(records[0].authors, vec!["Smith, John", "Doe, Alice"]);
    assert_eq!(
        records[1].affiliations,
        AffiliationField::List(vec!["University of Cambridge, Cambridge, UK.".to_string()])
    );
}

#[tokio::test]
#[traced_test]
async fn test_fetch_empty_input_makes_no_request() {
    let mock_server = MockServer::start().await;
    let client = create_mock_client(&mock_server);

    let records = client
        .fetch_medline::<&str>(&[])
        .await
        .expect("empty fetch should return Ok");
    assert!(records.is_empty());

    let received_requests = mock_server.received_requests().await.unwrap();
    assert_eq!(received_requests.len(), 0);
}

#[tokio::test]
#[traced_test]
async fn test_fetch_invalid_pmid_makes_no_request() {
    let mock_server = MockServer::start().await;
    let client = create_mock_client(&mock_server);

    let result = client.fetch_medline(&["38012345", "invalid"]).await;
    assert!(matches!(result, Err(PubMedError::InvalidPmid { .. })));

    let received_requests = mock_server.received_requests().await.unwrap();
    assert_eq!(received_requests.len(), 0);
}

#[tokio::test]
#[traced_test]
async fn test_pipeline_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, ESEARCH_TWO_IDS).await;
    mount_efetch(&mock_server, EFETCH_MEDLINE).await;

    let client = create_mock_client(&mock_server);
    let outcome = pipeline::run(&client, "cancer AND Pfizer", 5)
        .await
        .expect("pipeline should succeed");

    let records = outcome.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].pmid, "38012345");
    assert_eq!(records[0].title, "Oncolytic virus therapy in solid tumours.");
    assert_eq!(records[0].publication_date, "2023 Nov 28");
    assert_eq!(records[0].non_academic_authors, "Doe, Alice");
    assert_eq!(
        records[0].company_affiliations,
        "Pfizer Inc., 235 East 42nd Street, New York, NY, USA. Electronic address: alice.doe@pfizer.com."
    );
    assert_eq!(records[0].corresponding_email, "alice.doe@pfizer.com.");
    assert_eq!(outcome.pmids(), ["38012345", "38012346"]);
}

#[tokio::test]
#[traced_test]
async fn test_pipeline_no_results_skips_fetch() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, ESEARCH_EMPTY).await;
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let outcome = pipeline::run(&client, "no such topic", 5)
        .await
        .expect("pipeline should succeed");

    assert_eq!(outcome, RunOutcome::NoResults);
}
