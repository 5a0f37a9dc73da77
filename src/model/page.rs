//! Pagination envelope for exercise listings.

use serde::{Deserialize, Serialize};

use super::Exercise;

/// One page of the `exerciseinfo` listing.
///
/// `next` and `previous` are opaque cursors (absolute URLs in practice)
/// and are only ever passed back to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisePage {
    /// Total number of exercises available across all pages.
    pub count: Option<i64>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Option<Vec<Exercise>>,
}

impl ExercisePage {
    /// Returns the exercises on this page, or an empty slice.
    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        self.results.as_deref().unwrap_or_default()
    }

    /// Returns the cursor of the following page, if any.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_deref()
    }
}
