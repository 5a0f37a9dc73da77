//! Fetch orchestration for the wger exercise API.
//!
//! This module provides:
//! - The error taxonomy ([`NetworkError`])
//! - Endpoint resolution ([`Endpoint`])
//! - Single-request fetching and decoding ([`FetchClient`])
//! - Sequential, paced variation fetching ([`VariationAggregator`])
//! - The service capability consumed by presentation code
//!   ([`ExerciseService`], [`ExerciseApi`])

mod endpoint;
mod error;
mod fetch;
mod service;
mod variations;


pub use endpoint::{DEFAULT_BASE_URL, Endpoint, default_base_url};
pub use error::NetworkError;
pub use fetch::{FetchClient, decode_response};
pub use service::{ExerciseApi, ExerciseService};
pub use variations::{DEFAULT_PACING_DELAY, VariationAggregator};
