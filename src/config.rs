//! Collection client configuration.
//!
//! The API credential is always supplied at runtime (environment or caller),
//! never compiled in.

use std::time::Duration;

/// Default base endpoint of the collection API.
pub const DEFAULT_BASE_URL: &str = "https://api.harvardartmuseums.org";

/// Default quiet period before a search query is sent.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "MUSEUM_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "MUSEUM_API_URL";

/// Configuration for [`crate::source::MuseumClient`] and the search screen.
///
/// # Example
///
/// ```
/// use museum_browser::config::CollectionConfig;
/// use std::time::Duration;
///
/// let config = CollectionConfig::default()
///     .with_api_key("my-key")
///     .with_search_debounce(Duration::from_millis(300));
/// assert!(config.has_api_key());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    /// API credential sent as the `apikey` query parameter
    pub api_key: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Quiet period before a search query is sent
    pub search_debounce: Duration,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }
}

impl CollectionConfig {
    /// Create a new CollectionConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the search debounce window.
    pub fn with_search_debounce(mut self, debounce: Duration) -> Self {
        self.search_debounce = debounce;
        self
    }

    /// Whether a non-blank API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Build from `MUSEUM_API_KEY` and `MUSEUM_API_URL`; unset values keep defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config = config.with_api_key(key.trim());
        }
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config = config.with_base_url(url.trim());
            }
        }
        config
    }
}
