//! Transport-level error type.

use thiserror::Error;

/// Error type for a failed HTTP round-trip.
///
/// Only covers failures where no response was obtained. A response with
/// any status code is not an error at this layer.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and failures while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The client refused to build a request for the URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
