//! Flattening, coercion, retention filtering, and deduplication.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use alphavantage_api::types::RawInsiderTransaction;

use crate::extract::TickerBatch;
use crate::model::{InsiderTransaction, MAX_CODE_LEN, MAX_NAME_LEN, MAX_SYMBOL_LEN};

/// Counters describing one transform pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformSummary {
    /// Raw records across all batches.
    pub input: usize,
    /// Dropped: no parseable transaction date or no symbol.
    pub dropped_missing: usize,
    /// Dropped: older than the retention cutoff.
    pub dropped_stale: usize,
    /// Collapsed onto an earlier record with the same natural key.
    pub duplicates: usize,
    /// Records in the output sequence.
    pub kept: usize,
}

enum Normalized {
    Keep(InsiderTransaction),
    MissingField,
    Stale,
}

/// Flattens per-ticker batches into one normalized, retention-filtered,
/// deduplicated sequence.
///
/// Input order is preserved and the first occurrence of a natural key wins.
/// Records dated before `cutoff` are dropped; the cutoff date itself is kept.
/// Applying this to an already-normalized sequence changes nothing.
pub fn transform(
    batches: &[TickerBatch],
    cutoff: NaiveDate,
) -> (Vec<InsiderTransaction>, TransformSummary) {
    let mut summary = TransformSummary::default();
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for batch in batches {
        for raw in &batch.records {
            summary.input += 1;
            match normalize(raw, &batch.symbol, cutoff) {
                Normalized::Keep(record) => {
                    if seen.insert(record.natural_key()) {
                        records.push(record);
                    } else {
                        summary.duplicates += 1;
                    }
                }
                Normalized::MissingField => summary.dropped_missing += 1,
                Normalized::Stale => summary.dropped_stale += 1,
            }
        }
    }

    summary.kept = records.len();
    tracing::info!(
        "Transformed {} raw records into {} ({} missing, {} stale, {} duplicates)",
        summary.input,
        summary.kept,
        summary.dropped_missing,
        summary.dropped_stale,
        summary.duplicates
    );
    (records, summary)
}

fn normalize(raw: &RawInsiderTransaction, symbol: &str, cutoff: NaiveDate) -> Normalized {
    // The requested symbol is authoritative; the payload's ticker echo is
    // ignored, matching the upstream contract.
    let symbol = bounded(&symbol.to_uppercase(), MAX_SYMBOL_LEN);
    if symbol.is_empty() {
        return Normalized::MissingField;
    }

    let Some(date) = raw.transaction_date.as_deref().and_then(parse_date) else {
        return Normalized::MissingField;
    };
    if date < cutoff {
        return Normalized::Stale;
    }

    Normalized::Keep(InsiderTransaction {
        symbol,
        date,
        executive: bounded(raw.executive.as_deref().unwrap_or(""), MAX_NAME_LEN),
        title: bounded(raw.executive_title.as_deref().unwrap_or(""), MAX_NAME_LEN),
        security_type: bounded(raw.security_type.as_deref().unwrap_or(""), MAX_CODE_LEN),
        transaction: bounded(
            raw.acquisition_or_disposal.as_deref().unwrap_or(""),
            MAX_CODE_LEN,
        ),
        shares: safe_decimal(raw.shares.as_deref()),
        price: safe_decimal(raw.share_price.as_deref()),
    })
}

/// Dates occasionally arrive with a time suffix; only the calendar date matters.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Trim, then cap at the column width on a character boundary.
fn bounded(value: &str, max_len: usize) -> String {
    let mut text = value.trim().to_string();
    if let Some((idx, _)) = text.char_indices().nth(max_len) {
        text.truncate(idx);
    }
    text
}

/// Numeric fields default to 0.00 when missing or unparseable, and are
/// rounded to the two decimal places the table stores.
fn safe_decimal(value: Option<&str>) -> Decimal {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<Decimal>().ok())
        .unwrap_or_default()
        .round_dp(2)
}
