//! Remote collection source.
//!
//! [`CollectionSource`] is the seam the rest of the crate depends on;
//! [`MuseumClient`] implements it over any [`HttpClient`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::adapters::ReqwestHttpClient;
use crate::config::CollectionConfig;
use crate::error::{CollectionError, CollectionResult};
use crate::models::{Artwork, ArtworkId, Exhibition, RecordsEnvelope};
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Longest slice of an error body kept in `ServerError` messages.
const ERROR_BODY_PREVIEW: usize = 200;

/// The four read operations against the collection.
///
/// Every list operation returns image-bearing records only, in the order the
/// remote returned them.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// All exhibitions that have at least one image.
    async fn list_exhibitions(&self) -> CollectionResult<Vec<Exhibition>>;

    /// Artworks shown in the exhibition with this `id`.
    async fn list_artworks_for_exhibition(&self, exhibition_id: u64)
        -> CollectionResult<Vec<Artwork>>;

    /// A single artwork. Missing ids yield [`CollectionError::NotFound`].
    async fn get_artwork(&self, id: ArtworkId) -> CollectionResult<Artwork>;

    /// Free-text search across the collection.
    async fn search_artworks(&self, query: &str) -> CollectionResult<Vec<Artwork>>;
}

/// Client for the museum collection API.
#[derive(Debug, Clone)]
pub struct MuseumClient<C = ReqwestHttpClient> {
    /// Base URL for the collection API
    base_url: String,
    api_key: String,
    http: C,
}

impl MuseumClient<ReqwestHttpClient> {
    /// Create a client backed by reqwest, honoring the configured timeout.
    pub fn new(config: &CollectionConfig) -> CollectionResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
        Ok(Self::with_http(config, http))
    }
}

impl<C: HttpClient> MuseumClient<C> {
    /// Create a client over a custom HTTP implementation.
    pub fn with_http(config: &CollectionConfig, http: C) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `{base}/{path}?apikey=K&{params}&hasimage=1`.
    fn url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}/{}?apikey={}",
            self.base_url,
            path,
            urlencoding::encode(&self.api_key)
        );
        for (key, value) in params {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url.push_str("&hasimage=1");
        url
    }

    async fn send(&self, path: &str, url: &str) -> CollectionResult<Response> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::debug!(path = %path, "GET collection");
        let response = self.http.get(url, &headers).await.map_err(|e| {
            tracing::debug!(path = %path, error = %e, "collection request failed");
            CollectionError::Transport(e)
        })?;
        tracing::debug!(path = %path, status = response.status, "collection response");
        Ok(response)
    }

    fn ensure_success(response: &Response) -> CollectionResult<()> {
        if response.is_success() {
            return Ok(());
        }
        let body = response.text_lossy();
        let message: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
        Err(HttpError::ServerError {
            status: response.status,
            message,
        }
        .into())
    }

    async fn get_records<T: DeserializeOwned>(
        &self,
        what: &'static str,
        path: &str,
        params: &[(&str, &str)],
    ) -> CollectionResult<Vec<T>> {
        let url = self.url(path, params);
        let response = self.send(path, &url).await?;
        Self::ensure_success(&response)?;
        let envelope: RecordsEnvelope<T> = response
            .json()
            .map_err(|e| CollectionError::decode(what, e))?;
        Ok(envelope.records)
    }
}

#[async_trait]
impl<C: HttpClient> CollectionSource for MuseumClient<C> {
    async fn list_exhibitions(&self) -> CollectionResult<Vec<Exhibition>> {
        self.get_records("exhibitions", "exhibition", &[]).await
    }

    async fn list_artworks_for_exhibition(
        &self,
        exhibition_id: u64,
    ) -> CollectionResult<Vec<Artwork>> {
        let exhibition = exhibition_id.to_string();
        self.get_records("artworks", "object", &[("exhibition", exhibition.as_str())])
            .await
    }

    async fn get_artwork(&self, id: ArtworkId) -> CollectionResult<Artwork> {
        let path = format!("object/{}", id);
        let url = self.url(&path, &[]);
        let response = self.send(&path, &url).await?;
        if response.status == 404 {
            return Err(CollectionError::NotFound { id });
        }
        Self::ensure_success(&response)?;
        response
            .json()
            .map_err(|e| CollectionError::decode("artwork", e))
    }

    async fn search_artworks(&self, query: &str) -> CollectionResult<Vec<Artwork>> {
        self.get_records("search results", "object", &[("q", query)])
            .await
    }
}
