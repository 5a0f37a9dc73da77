//! Error body returned by the API on non-200 responses.

use serde::{Deserialize, Serialize};

use crate::api::NetworkError;

/// The `detail` text the server uses for missing resources.
pub const NOT_FOUND_DETAIL: &str = "Not found.";

/// JSON body of a failed request: `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    /// Maps the server's detail text onto the error taxonomy.
    ///
    /// Only an exact `"Not found."` becomes [`NetworkError::NotFound`].
    #[must_use]
    pub fn into_network_error(self) -> NetworkError {
        if self.detail == NOT_FOUND_DETAIL {
            NetworkError::NotFound
        } else {
            NetworkError::Other(self.detail)
        }
    }
}
