//! Price source errors

use thiserror::Error;

/// Price fetch failures
///
/// Timeouts surface through the transport variant and are handled
/// identically to any other fetch failure: the caller logs and skips
/// the pair for that cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// Response decoded but no known shape carried a price
    #[error("unrecognized price payload")]
    UnrecognizedPayload,
}
