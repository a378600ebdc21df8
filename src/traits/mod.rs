//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET operations

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
