//! Human-readable messages for fetch errors.

use std::error::Error;

use crate::api::NetworkError;

/// Message shown for errors that carry no useful detail.
pub const GENERIC_NETWORK_MESSAGE: &str = "A network error occurred. Please try again.";

/// Maps an error to the text shown to the user.
#[must_use]
pub fn user_message(error: &NetworkError) -> String {
    match error {
        NetworkError::InvalidUrl | NetworkError::InvalidResponse | NetworkError::NoData => {
            GENERIC_NETWORK_MESSAGE.to_string()
        }
        NetworkError::NotFound => "Not found.".to_string(),
        NetworkError::Other(detail) => detail.clone(),
        NetworkError::Decoding(cause) => cause.to_string(),
        NetworkError::Underlying(cause) => describe_chain(cause.as_ref()),
    }
}

/// Joins an error and its sources, e.g. "Connection error: ...: refused".
fn describe_chain(error: &(dyn Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
