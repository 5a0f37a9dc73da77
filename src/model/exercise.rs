//! Exercise records.

use serde::{Deserialize, Serialize};
use url::Url;

use super::ExerciseImage;
use super::html;

/// A single exercise as returned by `exerciseinfo`.
///
/// Every field is optional because the server may omit any of them.
/// Equality compares all fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub uuid: Option<String>,
    pub exercise_base_id: Option<i64>,
    /// HTML-formatted description.
    pub description: Option<String>,
    /// Creation timestamp as sent by the server; not parsed.
    pub created: Option<String>,
    pub images: Option<Vec<ExerciseImage>>,
    /// IDs of exercises that are variations of this one.
    pub variations: Option<Vec<i64>>,
}

impl Exercise {
    /// Returns the image flagged as main, if any.
    #[must_use]
    pub fn main_image(&self) -> Option<&ExerciseImage> {
        self.images.as_deref()?.iter().find(|image| image.is_main())
    }

    /// Returns the URL string of the main image, if any.
    #[must_use]
    pub fn main_image_url(&self) -> Option<&str> {
        self.main_image()?.image.as_deref()
    }

    /// Returns the main image URL parsed, or `None` if absent or malformed.
    #[must_use]
    pub fn main_image_parsed(&self) -> Option<Url> {
        self.main_image_url().and_then(|s| Url::parse(s).ok())
    }

    /// Returns the variation IDs, or an empty slice if the server sent none.
    #[must_use]
    pub fn variation_ids(&self) -> &[i64] {
        self.variations.as_deref().unwrap_or_default()
    }

    /// Returns the description as plain text, or an empty string.
    #[must_use]
    pub fn plain_description(&self) -> String {
        self.description
            .as_deref()
            .map(html::to_plain_text)
            .unwrap_or_default()
    }
}
