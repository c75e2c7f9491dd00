//! Serialized per-ticker extraction with request pacing.

use std::time::Duration;

use tokio::time::sleep;

use alphavantage_api::types::RawInsiderTransaction;
use alphavantage_api::{Client, InsiderTransactionsQuery};

/// Raw records fetched for one ticker. An empty vector is a valid outcome:
/// the API reported no data for the symbol.
#[derive(Debug, Clone)]
pub struct TickerBatch {
    pub symbol: String,
    pub records: Vec<RawInsiderTransaction>,
}

/// A ticker whose fetch failed; the run continues without it.
#[derive(Debug, Clone)]
pub struct FetchFailure {
    pub symbol: String,
    pub reason: String,
}

/// Result of the extraction phase.
#[derive(Debug, Default)]
pub struct ExtractOutcome {
    pub batches: Vec<TickerBatch>,
    pub failures: Vec<FetchFailure>,
}

/// Fetches insider transactions for each symbol in turn, one request in
/// flight at a time, sleeping `delay` between successive requests to stay
/// under the upstream quota. There is no retry beyond this pacing; a failed
/// symbol is recorded and skipped, never aborting the run.
pub async fn fetch_all(client: &Client, symbols: &[String], delay: Duration) -> ExtractOutcome {
    let mut outcome = ExtractOutcome::default();

    for (i, symbol) in symbols.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            sleep(delay).await;
        }

        tracing::info!("Fetching insider transactions for {}", symbol);
        match client
            .insider_transactions(&InsiderTransactionsQuery::new(symbol.clone()))
            .await
        {
            Ok(records) => {
                tracing::info!("Fetched {} records for {}", records.len(), symbol);
                outcome.batches.push(TickerBatch {
                    symbol: symbol.clone(),
                    records,
                });
            }
            Err(err) => {
                tracing::warn!("Fetch failed for {}: {}", symbol, err);
                outcome.failures.push(FetchFailure {
                    symbol: symbol.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    outcome
}
