//! The normalized insider-transaction record and its natural key.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Column widths of the `insider_transactions` table.
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_CODE_LEN: usize = 50;

/// One normalized insider transaction, ready for upsert and backup.
///
/// Field names follow the table columns; `security_type` maps to the `type`
/// column and is renamed accordingly in serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsiderTransaction {
    pub symbol: String,
    pub date: NaiveDate,
    pub executive: String,
    pub title: String,
    #[serde(rename = "type")]
    pub security_type: String,
    pub transaction: String,
    pub shares: Decimal,
    pub price: Decimal,
}

/// The composite natural key `(symbol, date, executive, shares, price)`.
///
/// The executive component is trimmed and lowercased before comparison, so
/// records differing only in whitespace or casing of the filer name collapse
/// to one. The stored record keeps the original casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionKey {
    pub symbol: String,
    pub date: NaiveDate,
    pub executive: String,
    pub shares: Decimal,
    pub price: Decimal,
}

impl InsiderTransaction {
    pub fn natural_key(&self) -> TransactionKey {
        TransactionKey {
            symbol: self.symbol.clone(),
            date: self.date,
            executive: self.executive.trim().to_lowercase(),
            shares: self.shares,
            price: self.price,
        }
    }
}
