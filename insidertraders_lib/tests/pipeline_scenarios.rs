//! End-to-end extract + transform + backup scenarios against a mock API.
//! The database step is exercised separately in `store_integration.rs`.

use std::path::PathBuf;
use std::time::Duration;

use alphavantage_api::Client;
use chrono::NaiveDate;
use insidertraders_lib::{fetch_all, transform, write_backup, RunSummary};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn symbols(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

async fn mock_symbol(server: &MockServer, symbol: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("symbol", symbol))
        .respond_with(response)
        .mount(server)
        .await;
}

fn record(symbol: &str, date: &str, executive: &str) -> serde_json::Value {
    serde_json::json!({
        "transaction_date": date,
        "ticker": symbol,
        "executive": executive,
        "executive_title": "Director",
        "security_type": "Common Stock",
        "acquisition_or_disposal": "D",
        "shares": "250.0",
        "share_price": "99.50"
    })
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "insidertraders-scenario-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[tokio::test]
async fn partial_failure_still_produces_backup_for_healthy_tickers() {
    let server = MockServer::start().await;
    for symbol in ["IBM", "AAPL", "MSFT"] {
        mock_symbol(
            &server,
            symbol,
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [record(symbol, "2025-06-20", "Example, Person")]
            })),
        )
        .await;
    }
    mock_symbol(
        &server,
        "GOOGL",
        ResponseTemplate::new(503).set_body_string("Service Unavailable"),
    )
    .await;

    let tracked = symbols(&["IBM", "AAPL", "MSFT", "GOOGL"]);
    let client = Client::with_base_url(&server.uri(), "test-key".to_string()).unwrap();
    let outcome = fetch_all(&client, &tracked, Duration::ZERO).await;

    let mut summary = RunSummary::from_extraction(&tracked, &outcome);
    assert_eq!(summary.failed_tickers(), 1);

    let cutoff = NaiveDate::from_ymd_opt(2024, 8, 6).unwrap();
    let (records, transform_summary) = transform(&outcome.batches, cutoff);
    summary.transform = transform_summary;
    assert_eq!(records.len(), 3);
    assert_eq!(summary.transform.kept, 3);
    assert_eq!(summary.transform.input, 3);

    let dir = scratch_dir("partial");
    let backup = write_backup(&dir, "backup.csv", &records).unwrap();
    let contents = std::fs::read_to_string(&backup).unwrap();
    for symbol in ["IBM", "AAPL", "MSFT"] {
        assert!(contents.contains(symbol));
    }
    assert!(!contents.contains("GOOGL"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn retention_filter_applies_to_fetched_batches() {
    let server = MockServer::start().await;
    mock_symbol(
        &server,
        "IBM",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                record("IBM", "2023-08-06", "Three Years Ago"),
                record("IBM", "2025-08-06", "One Year Ago"),
            ]
        })),
    )
    .await;

    let client = Client::with_base_url(&server.uri(), "test-key".to_string()).unwrap();
    let outcome = fetch_all(&client, &symbols(&["IBM"]), Duration::ZERO).await;

    // Run dated 2026-08-06 with the default two-year window.
    let cutoff = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap() - chrono::Duration::days(730);
    let (records, summary) = transform(&outcome.batches, cutoff);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].executive, "One Year Ago");
    assert_eq!(summary.dropped_stale, 1);
}
