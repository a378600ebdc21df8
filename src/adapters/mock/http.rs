//! Mock HTTP client for testing.
//!
//! Returns predefined responses or errors per URL and records every request.
//! A per-URL delay can be configured to exercise out-of-order completions
//! under `tokio::time::pause`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return an error
    Error(HttpError),
}

impl MockResponse {
    /// A response with the given status and a JSON body.
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        MockResponse::Success(Response::new(status, body.to_string()))
    }
}

/// Mock HTTP client for testing.
///
/// Lookup order for a URL: exact match, then the longest configured prefix,
/// then the default response.
///
/// # Example
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "https://api.example.com/object/1",
///     MockResponse::json(200, serde_json::json!({"id": 1, "title": "Vase"})),
/// );
/// let response = client.get("https://api.example.com/object/1", &Headers::new()).await?;
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Artificial latency by URL pattern
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Resolve `url` against a pattern table: exact, then longest prefix.
fn lookup<'a, V>(table: &'a HashMap<String, V>, url: &str) -> Option<&'a V> {
    if let Some(value) = table.get(url) {
        return Some(value);
    }
    table
        .iter()
        .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
        .max_by_key(|(pattern, _)| pattern.len())
        .map(|(_, value)| value)
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a URL (exact or prefix).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Delay responses for a URL (exact or prefix) by `delay`.
    pub fn set_delay(&self, url: &str, delay: Duration) {
        let mut delays = self.delays.lock().unwrap();
        delays.insert(url.to_string(), delay);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Count recorded requests whose URL contains `fragment`.
    pub fn count_requests_containing(&self, fragment: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.url.contains(fragment))
            .count()
    }

    fn record_request(&self, url: &str, headers: &Headers) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();
        if let Some(response) = lookup(&responses, url) {
            return Some(response.clone());
        }
        self.default_response.lock().unwrap().clone()
    }

    fn get_delay(&self, url: &str) -> Option<Duration> {
        let delays = self.delays.lock().unwrap();
        lookup(&delays, url).copied()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(url, headers);

        if let Some(delay) = self.get_delay(url) {
            tokio::time::sleep(delay).await;
        }

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
