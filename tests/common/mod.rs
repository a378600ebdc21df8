//! Common test utilities for integration tests.
//!
//! Fixtures shaped like the collection API's JSON, plus helpers that point a
//! real [`MuseumClient`] at a `wiremock` server.
//!
//! # Example
//!
//! ```ignore
//! let server = MockServer::start().await;
//! let client = client_for(&server);
//! ```

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::MockServer;

use museum_browser::config::CollectionConfig;
use museum_browser::source::MuseumClient;

/// API key used by every test client.
pub const TEST_API_KEY: &str = "test-key-123";

/// Config pointing at the mock server.
pub fn config_for(server: &MockServer) -> CollectionConfig {
    CollectionConfig::new()
        .with_base_url(server.uri())
        .with_api_key(TEST_API_KEY)
}

/// A real reqwest-backed client pointing at the mock server.
pub fn client_for(server: &MockServer) -> MuseumClient {
    MuseumClient::new(&config_for(server)).expect("client builds")
}

/// An object record as the API returns it.
pub fn artwork_json(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "dated": "1890",
        "images": [{"baseimageurl": format!("https://nrs.example/{}", id), "caption": null}],
        "people": [{"name": "Test Artist", "role": "Artist"}],
        "division": "European and American Art",
        "medium": "Oil on canvas"
    })
}

/// An exhibition record as the API returns it.
pub fn exhibition_json(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "exhibitionid": id * 10,
        "title": title,
        "begindate": "2024-01-12",
        "enddate": "2024-03-03",
        "description": "A long description.",
        "shortdescription": "Short.",
        "primaryimageurl": null,
        "images": null
    })
}

/// Wrap records in the `{ "records": [...] }` envelope.
pub fn envelope(records: Vec<Value>) -> Value {
    json!({
        "info": {"totalrecords": records.len(), "page": 1},
        "records": records
    })
}
