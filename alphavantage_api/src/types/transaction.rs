use serde::{Deserialize, Serialize};

/// Response envelope for the `INSIDER_TRANSACTIONS` function.
///
/// Alpha Vantage reports most failures in-band: a 200 response may carry a
/// `Note` or `Information` key (per-minute or daily quota exhausted) or an
/// `Error Message` key (unknown symbol, bad parameters) instead of `data`.
#[derive(Deserialize, Debug)]
pub struct Envelope {
    #[serde(default)]
    pub data: Option<Vec<RawInsiderTransaction>>,
    #[serde(rename = "Note", default)]
    pub note: Option<String>,
    #[serde(rename = "Information", default)]
    pub information: Option<String>,
    #[serde(rename = "Error Message", default)]
    pub error_message: Option<String>,
}

/// One insider transaction as returned by the API.
///
/// Every field is a string on the wire, and any field may be absent or empty.
/// Normalization into typed records happens downstream.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RawInsiderTransaction {
    #[serde(default)]
    pub transaction_date: Option<String>,

    #[serde(default)]
    pub ticker: Option<String>,

    #[serde(default)]
    pub executive: Option<String>,

    #[serde(default)]
    pub executive_title: Option<String>,

    #[serde(default)]
    pub security_type: Option<String>,

    #[serde(default)]
    pub acquisition_or_disposal: Option<String>,

    #[serde(default)]
    pub shares: Option<String>,

    #[serde(default)]
    pub share_price: Option<String>,
}
