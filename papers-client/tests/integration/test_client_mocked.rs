//! ESearch/EFetch client behavior against a mock E-utilities server

mod common;

use std::time::Duration;

use papers_client::{ClientConfig, PubMedError};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{
    EFETCH_TWO_RECORDS, ESEARCH_ERROR, ESEARCH_NO_IDS, ESEARCH_TWO_IDS, create_mock_client,
    create_mock_client_with, mount_efetch, mount_esearch,
};

#[tokio::test]
#[traced_test]
async fn test_search_returns_ids_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("term", "cancer immunotherapy"))
        .and(query_param("retmax", "20"))
        .and(query_param("retmode", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ESEARCH_TWO_IDS))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let ids = client
        .search_ids("cancer immunotherapy", 20)
        .await
        .expect("search should succeed");

    assert_eq!(ids, vec!["12345678".to_string(), "87654321".to_string()]);
}

#[tokio::test]
#[traced_test]
async fn test_search_with_no_hits() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, ESEARCH_NO_IDS).await;

    let client = create_mock_client(&mock_server);
    let ids = client.search_ids("zzzxqqy", 10).await.unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_search_sends_identification_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("api_key", "secret-key"))
        .and(query_param("email", "someone@example.org"))
        .and(query_param("tool", "my-tool"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ESEARCH_NO_IDS))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new()
        .with_api_key("secret-key")
        .with_email("someone@example.org")
        .with_tool("my-tool");
    let client = create_mock_client_with(&mock_server, config);

    client.search_ids("asthma", 5).await.unwrap();
}

#[tokio::test]
#[traced_test]
async fn test_search_error_envelope_is_api_error() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, ESEARCH_ERROR).await;

    let client = create_mock_client(&mock_server);
    let err = client.search_ids("((bad", 10).await.unwrap_err();

    match &err {
        PubMedError::ApiError {
            operation, message, ..
        } => {
            assert_eq!(*operation, "ESearch");
            assert!(message.contains("Invalid query syntax"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
    assert_eq!(err.category(), "ApiError");
}

#[tokio::test]
#[traced_test]
async fn test_search_malformed_json_is_api_error() {
    let mock_server = MockServer::start().await;
    mount_esearch(&mock_server, "<html>Service unavailable</html>").await;

    let client = create_mock_client(&mock_server);
    let err = client.search_ids("cancer", 10).await.unwrap_err();

    assert!(matches!(err, PubMedError::ApiError { .. }));
    assert!(err.to_string().contains("malformed ESearch response"));
}

#[tokio::test]
#[traced_test]
async fn test_server_error_status_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.search_ids("cancer", 10).await.unwrap_err();

    match err {
        PubMedError::ApiError { status, .. } => assert_eq!(status, 500),
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
#[traced_test]
async fn test_slow_server_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(ESEARCH_NO_IDS)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new().with_timeout(Duration::from_millis(200));
    let client = create_mock_client_with(&mock_server, config);
    let err = client.search_ids("cancer", 10).await.unwrap_err();

    assert!(matches!(err, PubMedError::RequestError { .. }));
    assert!(err.is_network());
    assert_eq!(err.category(), "NetworkError");
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let client = papers_client::PubMedClient::with_config(
        ClientConfig::new()
            .with_base_url("http://127.0.0.1:1")
            .with_rate_limit(100.0)
            .with_timeout(Duration::from_secs(2)),
    )
    .unwrap();

    let err = client.search_ids("cancer", 10).await.unwrap_err();
    assert!(err.is_network());
}

#[tokio::test]
#[traced_test]
async fn test_fetch_returns_xml_for_batch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("id", "12345678,87654321"))
        .and(query_param("retmode", "xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EFETCH_TWO_RECORDS))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let ids = vec!["12345678".to_string(), "87654321".to_string()];
    let xml = client.fetch_xml(&ids).await.unwrap();

    assert!(xml.contains("<PMID Version=\"1\">12345678</PMID>"));
    let records = papers_client::parse_records(&xml).unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
#[traced_test]
async fn test_fetch_error_document_is_api_error() {
    let mock_server = MockServer::start().await;
    mount_efetch(
        &mock_server,
        "<eFetchResult>\n\t<ERROR>Empty id list - nothing todo</ERROR>\n</eFetchResult>",
    )
    .await;

    let client = create_mock_client(&mock_server);
    let err = client.fetch_xml(&["1".to_string()]).await.unwrap_err();

    match err {
        PubMedError::ApiError {
            operation, message, ..
        } => {
            assert_eq!(operation, "EFetch");
            assert_eq!(message, "Empty id list - nothing todo");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_rejects_non_numeric_id_before_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client
        .fetch_xml(&["12345678".to_string(), "PMC123".to_string()])
        .await
        .unwrap_err();

    assert!(matches!(err, PubMedError::InvalidPmid { pmid } if pmid == "PMC123"));
}
