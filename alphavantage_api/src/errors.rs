//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unexpected response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API answered 200 but the body carried a rate-limit or quota note
    /// instead of data.
    #[error("Request throttled: {note}")]
    Throttled { note: String },
    /// The API rejected the request (unknown symbol or bad parameters).
    #[error("API error: {message}")]
    Api { message: String },
}
