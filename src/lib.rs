//! wger-exercises: client for the wger exercise API
//!
//! A library for fetching exercises, their detail and their variations
//! from the wger REST API, with request pacing and observable view models
//! for presentation layers.

pub mod api;
pub mod config;
pub mod model;
pub mod presentation;
pub mod time;
pub mod transport;

#[cfg(test)]
mod test_fixtures;
