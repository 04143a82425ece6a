//! Remote fetch error types.

use thiserror::Error;

/// Errors that can occur when fetching a deck over HTTP.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server could not be reached.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    ApiError { status: u16, url: String },

    /// The body was not a JSON array of cards.
    #[error("failed to decode deck: {0}")]
    Decode(String),

    /// The body decoded to an empty array.
    #[error("remote deck is empty")]
    EmptyDeck,
}
