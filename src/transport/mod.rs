//! Transport layer for talking to the exercise API over HTTP.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])

mod client;
mod error;
mod http;


pub use client::{ReqwestClient, USER_AGENT};
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
