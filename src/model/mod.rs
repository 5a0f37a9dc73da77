//! Wire data model of the exercise API.
//!
//! Field names follow the server's snake_case keys, so serde needs no
//! renames. Unknown keys are ignored; missing keys decode as `None`.

mod error_response;
mod exercise;
pub mod html;
mod image;
mod page;


pub use error_response::{ErrorResponse, NOT_FOUND_DETAIL};
pub use exercise::Exercise;
pub use image::ExerciseImage;
pub use page::ExercisePage;
