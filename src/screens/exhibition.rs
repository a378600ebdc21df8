use std::sync::Arc;

use super::Screen;
use crate::models::Artwork;
use crate::source::CollectionSource;

/// Artworks of one exhibition.
pub struct ExhibitionScreen {
    source: Arc<dyn CollectionSource>,
    exhibition_id: u64,
    screen: Screen<Artwork>,
}

impl ExhibitionScreen {
    pub fn new(source: Arc<dyn CollectionSource>, exhibition_id: u64) -> Self {
        Self {
            source,
            exhibition_id,
            screen: Screen::new(),
        }
    }

    pub fn exhibition_id(&self) -> u64 {
        self.exhibition_id
    }

    pub fn screen(&self) -> &Screen<Artwork> {
        &self.screen
    }

    pub async fn activate(&self) -> bool {
        tracing::debug!(exhibition_id = self.exhibition_id, "Activating exhibition screen");
        self.screen
            .run(self.source.list_artworks_for_exhibition(self.exhibition_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::config::CollectionConfig;
    use crate::models::ArtworkId;
    use crate::source::MuseumClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_reactivation_starts_a_fresh_cycle() {
        let http = MockHttpClient::new();
        http.set_response(
            "https://museum.test/object?apikey=k&exhibition=77&hasimage=1",
            MockResponse::json(200, json!({"records": [{"id": 3, "title": "Jar"}]})),
        );
        let config = CollectionConfig::new().with_base_url("https://museum.test").with_api_key("k");
        let screen = ExhibitionScreen::new(Arc::new(MuseumClient::with_http(&config, http.clone())), 77);

        assert!(screen.activate().await);
        let first_seq = screen.screen().with_state(|s| s.seq());
        assert!(screen.activate().await);

        assert_eq!(screen.screen().with_state(|s| s.seq()), first_seq + 1);
        assert_eq!(screen.screen().displayed()[0].id, ArtworkId(3));
        assert_eq!(http.get_requests().len(), 2);
    }
}
