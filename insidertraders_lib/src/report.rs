//! Run summary assembled across the pipeline phases.

use std::path::PathBuf;

use crate::extract::ExtractOutcome;
use crate::transform::TransformSummary;

/// Per-ticker outcome of the extraction phase.
#[derive(Debug, Clone)]
pub struct TickerReport {
    pub symbol: String,
    pub fetched: usize,
    pub error: Option<String>,
}

/// Everything the completion summary reports: per-ticker fetch outcomes,
/// transform counters, load result, and backup result.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub tickers: Vec<TickerReport>,
    pub transform: TransformSummary,
    pub loaded: Option<u64>,
    pub load_error: Option<String>,
    pub backup_path: Option<PathBuf>,
    pub backup_error: Option<String>,
}

impl RunSummary {
    /// Seeds the summary with per-ticker rows in the configured symbol order.
    pub fn from_extraction(symbols: &[String], outcome: &ExtractOutcome) -> Self {
        let tickers = symbols
            .iter()
            .map(|symbol| {
                if let Some(batch) = outcome.batches.iter().find(|b| &b.symbol == symbol) {
                    TickerReport {
                        symbol: symbol.clone(),
                        fetched: batch.records.len(),
                        error: None,
                    }
                } else {
                    let reason = outcome
                        .failures
                        .iter()
                        .find(|f| &f.symbol == symbol)
                        .map(|f| f.reason.clone())
                        .unwrap_or_else(|| "not fetched".to_string());
                    TickerReport {
                        symbol: symbol.clone(),
                        fetched: 0,
                        error: Some(reason),
                    }
                }
            })
            .collect();

        Self {
            tickers,
            ..Default::default()
        }
    }

    /// Count of tickers whose fetch failed.
    pub fn failed_tickers(&self) -> usize {
        self.tickers.iter().filter(|t| t.error.is_some()).count()
    }
}
