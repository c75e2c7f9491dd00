//! HTTP client for the Alpha Vantage query API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{InsiderTransactionsQuery, Query},
    types::{Envelope, RawInsiderTransaction},
    Error,
};

/// Request timeout for Alpha Vantage API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Alpha Vantage query API.
///
/// Holds the API credential and appends it to every request; query builders
/// never see the key, so it cannot leak into logged URLs.
pub struct Client {
    client: reqwest::Client,
    api_key: String,
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production Alpha Vantage API.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::with_base_url("https://www.alphavantage.co", api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: String) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            client,
            api_key,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_url(&self, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}/query", &self.base_api_url).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        let mut url = query.add_to_url(&url);
        url.query_pairs_mut().append_pair("apikey", &self.api_key);
        Ok(url)
    }

    async fn get<T, Q>(&self, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(query)?;
        let resp = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches the insider transactions reported for one symbol.
    ///
    /// Returns an empty vector when the API reports no data for the symbol.
    /// In-band throttle notes and error messages become `Error::Throttled`
    /// and `Error::Api` respectively, even though the HTTP status is 200.
    pub async fn insider_transactions(
        &self,
        query: &InsiderTransactionsQuery,
    ) -> Result<Vec<RawInsiderTransaction>, Error> {
        let envelope: Envelope = self.get(query).await?;

        if let Some(note) = envelope.note.or(envelope.information) {
            tracing::warn!("Alpha Vantage throttle note for {}: {}", query.symbol, note);
            return Err(Error::Throttled { note });
        }
        if let Some(message) = envelope.error_message {
            tracing::error!("Alpha Vantage error for {}: {}", query.symbol, message);
            return Err(Error::Api { message });
        }

        Ok(envelope.data.unwrap_or_default())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
