//! Error taxonomy for exercise API calls.

use thiserror::Error;

use crate::transport::HttpError;

/// Every way an exercise API call can fail.
///
/// The set is closed: callers can match exhaustively. Variants wrapping a
/// cause expose it through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The request target could not be formed.
    #[error("Invalid URL")]
    InvalidUrl,

    /// A response arrived but could not be classified.
    #[error("Invalid response")]
    InvalidResponse,

    /// The response had no body where content was expected.
    #[error("No data received")]
    NoData,

    /// The server reported that the resource does not exist.
    #[error("Not found")]
    NotFound,

    /// The server reported an error with the given detail text.
    #[error("Server error: {0}")]
    Other(String),

    /// A 200 response body did not match the expected schema.
    #[error("Failed to decode response: {0}")]
    Decoding(#[source] serde_json::Error),

    /// Transport failure or an unreadable error body.
    #[error("{0}")]
    Underlying(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl NetworkError {
    /// Wraps any error as [`NetworkError::Underlying`].
    pub fn underlying(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Underlying(Box::new(error))
    }
}

impl From<HttpError> for NetworkError {
    fn from(error: HttpError) -> Self {
        Self::underlying(error)
    }
}

/// Variant-wise equality; wrapped causes compare by their message.
impl PartialEq for NetworkError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidUrl, Self::InvalidUrl)
            | (Self::InvalidResponse, Self::InvalidResponse)
            | (Self::NoData, Self::NoData)
            | (Self::NotFound, Self::NotFound) => true,
            (Self::Other(a), Self::Other(b)) => a == b,
            (Self::Decoding(a), Self::Decoding(b)) => a.to_string() == b.to_string(),
            (Self::Underlying(a), Self::Underlying(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
