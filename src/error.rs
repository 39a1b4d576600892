//! Error types for the data layer.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure raised while fetching from the directory API.
///
/// Every fetch failure is recoverable: the view layer either surfaces it
/// as an error state (first load) or absorbs it while keeping the items
/// already shown (follow-up pages).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure from the HTTP client.
    #[error("http request failed: {0}")]
    Http(#[from] HttpError),

    /// Server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not decode into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
