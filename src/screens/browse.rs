use std::sync::Arc;

use super::Screen;
use crate::models::Exhibition;
use crate::source::CollectionSource;

/// Exhibitions list.
pub struct BrowseScreen {
    source: Arc<dyn CollectionSource>,
    screen: Screen<Exhibition>,
}

impl BrowseScreen {
    pub fn new(source: Arc<dyn CollectionSource>) -> Self {
        Self {
            source,
            screen: Screen::new(),
        }
    }

    pub fn screen(&self) -> &Screen<Exhibition> {
        &self.screen
    }

    /// Fetch the exhibitions list. Returns whether this activation's result
    /// was committed.
    pub async fn activate(&self) -> bool {
        tracing::debug!("Activating browse screen");
        self.screen.run(self.source.list_exhibitions()).await
    }
}
