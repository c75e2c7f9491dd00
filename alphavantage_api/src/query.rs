//! Query builders for the Alpha Vantage query API.
//!
//! Every Alpha Vantage call goes through the single `/query` path and selects
//! its operation with a `function` parameter. The `apikey` parameter is
//! appended by the client, not the query builder.

use url::Url;

/// A query that knows how to append its parameters to a request URL.
pub trait Query {
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Query for the `INSIDER_TRANSACTIONS` function.
#[derive(Debug, Clone)]
pub struct InsiderTransactionsQuery {
    pub symbol: String,
}

impl InsiderTransactionsQuery {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

impl Query for InsiderTransactionsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("function", "INSIDER_TRANSACTIONS")
            .append_pair("symbol", self.symbol.as_str());
        url
    }
}
