//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default API base URL.
pub const BASE_URL: &str = crate::api::DEFAULT_BASE_URL;

/// Default HTTP request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default number of listing pages fetched by `list`.
pub const PAGES: u32 = 1;

/// Default pacing delay as Duration.
#[must_use]
pub const fn pacing_delay() -> Duration {
    crate::api::DEFAULT_PACING_DELAY
}

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
