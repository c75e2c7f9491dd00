use alphavantage_api::types::{Envelope, RawInsiderTransaction};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn parses_insider_transactions_fixture() {
    let body = load_fixture("insider_transactions.json");
    let envelope: Envelope = serde_json::from_str(&body).unwrap();

    let data = envelope.data.unwrap();
    assert_eq!(data.len(), 3);

    let first = &data[0];
    assert_eq!(first.transaction_date.as_deref(), Some("2025-06-20"));
    assert_eq!(first.ticker.as_deref(), Some("IBM"));
    assert_eq!(first.executive.as_deref(), Some("Krishna, Arvind"));
    assert_eq!(first.acquisition_or_disposal.as_deref(), Some("A"));
    assert_eq!(first.shares.as_deref(), Some("1500.0"));
    assert_eq!(first.share_price.as_deref(), Some("172.35"));

    // Empty strings survive as-is; coercion is the pipeline's job.
    assert_eq!(data[2].share_price.as_deref(), Some(""));
}

#[test]
fn missing_fields_default_to_none() {
    let record: RawInsiderTransaction =
        serde_json::from_str(r#"{"transaction_date": "2025-01-15"}"#).unwrap();
    assert_eq!(record.transaction_date.as_deref(), Some("2025-01-15"));
    assert!(record.executive.is_none());
    assert!(record.shares.is_none());
    assert!(record.share_price.is_none());
}

#[test]
fn throttle_note_parses_without_data() {
    let body = r#"{"Note": "Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day."}"#;
    let envelope: Envelope = serde_json::from_str(body).unwrap();
    assert!(envelope.data.is_none());
    assert!(envelope.note.unwrap().contains("rate limit"));
}

#[test]
fn error_message_parses_without_data() {
    let body = r#"{"Error Message": "Invalid API call. Please retry or visit the documentation."}"#;
    let envelope: Envelope = serde_json::from_str(body).unwrap();
    assert!(envelope.data.is_none());
    assert!(envelope.error_message.is_some());
}

#[test]
fn unknown_keys_are_ignored() {
    let body = r#"{"data": [], "next_page_token": "abc"}"#;
    let envelope: Envelope = serde_json::from_str(body).unwrap();
    assert_eq!(envelope.data.unwrap().len(), 0);
}
