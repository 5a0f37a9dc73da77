//! Exercise image records.

use serde::{Deserialize, Serialize};

/// An image attached to an exercise.
///
/// Licensing metadata is carried through untouched; only `image` and
/// `is_main` are interpreted by this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseImage {
    pub id: Option<i64>,
    pub uuid: Option<String>,
    pub exercise_base: Option<i64>,
    pub exercise_base_uuid: Option<String>,
    /// Absolute URL of the image file.
    pub image: Option<String>,
    /// Marks the representative image of the exercise.
    pub is_main: Option<bool>,
    pub style: Option<String>,
    pub license: Option<i64>,
    pub license_title: Option<String>,
    pub license_object_url: Option<String>,
    pub license_author: Option<String>,
    pub license_author_url: Option<String>,
    pub license_derivative_source_url: Option<String>,
    pub author_history: Option<Vec<String>>,
}

impl ExerciseImage {
    /// Returns true if the server flagged this image as the main one.
    #[must_use]
    pub fn is_main(&self) -> bool {
        self.is_main == Some(true)
    }
}
