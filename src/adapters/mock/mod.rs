//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses and latency

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
