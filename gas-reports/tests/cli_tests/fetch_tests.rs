//! Integration tests for `fetch` against a mock explorer

use crate::init_logger;
use mockito::{Matcher, Server};
use std::fs;

use super::helpers::{fixture, run_cli, test_config};
use gas_reports::{config::DEFAULT_CONTRACT_ADDRESS, store::PROPOSE_BATCH_ANALYSIS_FILE};

#[tokio::test]
async fn test_fetch_writes_summary() {
    init_logger();
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            format!("/address/{DEFAULT_CONTRACT_ADDRESS}/explorer/transactions").as_str(),
        )
        .match_query(Matcher::UrlEncoded("limit".into(), "20".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fs::read_to_string(fixture("tenderly_transactions.json")).unwrap())
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), &server.url());

    let (code, printed) = run_cli(&["fetch"], &config).await;
    mock.assert_async().await;

    assert_eq!(code, 0, "unexpected failure: {printed}");
    assert!(printed.contains("Total transactions fetched: 4"));
    assert!(printed.contains("Found 2 proposeBatch transactions"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(PROPOSE_BATCH_ANALYSIS_FILE)).unwrap()).unwrap();
    assert_eq!(
        saved,
        serde_json::json!({
            "total_transactions": 2,
            "average_gas_used_proposeBatch": 101,
            "minimum_gas_used": 100,
            "maximum_gas_used": 101
        })
    );
}

#[tokio::test]
async fn test_fetch_limit_override_is_sent() {
    init_logger();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .match_query(Matcher::UrlEncoded("limit".into(), "5".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), &server.url());

    let (code, printed) = run_cli(&["fetch", "--limit", "5"], &config).await;
    mock.assert_async().await;

    assert_eq!(code, 0);
    assert!(printed.contains("Error: No matching proposeBatch transactions to summarize"));
    assert!(!dir.path().join(PROPOSE_BATCH_ANALYSIS_FILE).exists());
}

#[tokio::test]
async fn test_fetch_server_error_writes_nothing() {
    init_logger();
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), &server.url());

    let (code, printed) = run_cli(&["fetch"], &config).await;

    assert_eq!(code, 0);
    assert!(printed.contains("Total transactions fetched: 0"));
    assert!(!dir.path().join(PROPOSE_BATCH_ANALYSIS_FILE).exists());
}
