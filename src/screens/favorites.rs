use std::sync::Arc;
use tokio::sync::watch;

use super::Screen;
use crate::favorites::FavoritesStore;
use crate::hydration::{hydrate, HydrationReport};
use crate::models::Artwork;
use crate::source::CollectionSource;

/// Favorites list, rebuilt from scratch by a hydration pass on every
/// activation.
///
/// Per-item failures never fail the screen: it always ends `Loaded` with
/// whatever resolved. The report of the last committed pass carries the
/// partial-failure note.
pub struct FavoritesScreen {
    source: Arc<dyn CollectionSource>,
    favorites: FavoritesStore,
    screen: Screen<Artwork>,
    last_report: watch::Sender<Option<HydrationReport>>,
}

impl FavoritesScreen {
    pub fn new(source: Arc<dyn CollectionSource>, favorites: FavoritesStore) -> Self {
        let (last_report, _rx) = watch::channel(None);
        Self {
            source,
            favorites,
            screen: Screen::new(),
            last_report,
        }
    }

    pub fn screen(&self) -> &Screen<Artwork> {
        &self.screen
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// Report of the last committed hydration pass.
    pub fn last_report(&self) -> Option<HydrationReport> {
        self.last_report.borrow().clone()
    }

    /// Warning for a banner if the last pass lost any favorites.
    pub fn warning(&self) -> Option<String> {
        self.last_report
            .borrow()
            .as_ref()
            .and_then(HydrationReport::warning)
    }

    /// Snapshot the favorites and hydrate them.
    pub async fn activate(&self) -> bool {
        let ticket = self.screen.begin();
        let snapshot = self.favorites.snapshot();
        tracing::debug!(count = snapshot.len(), "Activating favorites screen");

        let report = hydrate(self.source.as_ref(), &snapshot).await;
        let records = report.records.clone();
        let committed = self.screen.commit(ticket, Ok(records));
        if committed {
            self.last_report.send_replace(Some(report));
        }
        committed
    }
}
