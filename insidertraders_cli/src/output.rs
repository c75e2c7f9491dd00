//! Rendering of the completion summary.

use insidertraders_lib::RunSummary;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct TickerRow {
    #[tabled(rename = "Ticker")]
    symbol: String,
    #[tabled(rename = "Fetched")]
    fetched: usize,
    #[tabled(rename = "Status")]
    status: String,
}

fn build_ticker_rows(summary: &RunSummary) -> Vec<TickerRow> {
    summary
        .tickers
        .iter()
        .map(|t| TickerRow {
            symbol: t.symbol.clone(),
            fetched: t.fetched,
            status: t.error.clone().unwrap_or_else(|| "ok".to_string()),
        })
        .collect()
}

pub fn render_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    out.push_str(&Table::new(build_ticker_rows(summary)).to_string());
    out.push('\n');

    let t = &summary.transform;
    out.push_str(&format!(
        "Transformed {} raw records into {} ({} missing fields, {} stale, {} duplicates)\n",
        t.input, t.kept, t.dropped_missing, t.dropped_stale, t.duplicates
    ));

    match (summary.loaded, &summary.load_error) {
        (Some(written), _) => out.push_str(&format!("Database: {} rows written\n", written)),
        (None, Some(err)) => out.push_str(&format!("Database: FAILED ({})\n", err)),
        (None, None) => out.push_str("Database: skipped (nothing to load)\n"),
    }

    match (&summary.backup_path, &summary.backup_error) {
        (Some(path), _) => out.push_str(&format!("Backup: {}\n", path.display())),
        (None, Some(err)) => out.push_str(&format!("Backup: FAILED ({})\n", err)),
        (None, None) => out.push_str("Backup: skipped\n"),
    }

    let failed = summary.failed_tickers();
    if failed > 0 {
        out.push_str(&format!("{} ticker(s) failed to fetch\n", failed));
    }

    out
}
