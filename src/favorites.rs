//! Process-wide favorites set.
//!
//! The set lives in a `watch` channel: every toggle publishes the new set to
//! all subscribers in the same call, so a heart in a list and a heart in a
//! detail view for the same id flip together. State is process-lifetime only.

use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::watch;

use crate::models::ArtworkId;

/// Snapshot of the favorited ids, ascending.
pub type FavoriteSet = BTreeSet<ArtworkId>;

/// The single source of truth for favorite status.
///
/// Cloning yields another handle onto the same set.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    tx: Arc<watch::Sender<FavoriteSet>>,
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoritesStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(FavoriteSet::new());
        Self { tx: Arc::new(tx) }
    }

    /// Flip membership of `id`. Returns whether `id` is a favorite afterwards.
    pub fn toggle(&self, id: ArtworkId) -> bool {
        let mut now_favorite = false;
        self.tx.send_modify(|set| {
            now_favorite = if set.remove(&id) {
                false
            } else {
                set.insert(id);
                true
            };
        });
        tracing::debug!(artwork_id = %id, favorite = now_favorite, "Toggled favorite");
        now_favorite
    }

    /// Pure membership query.
    pub fn is_favorite(&self, id: ArtworkId) -> bool {
        self.tx.borrow().contains(&id)
    }

    /// Copy of the current set.
    pub fn snapshot(&self) -> FavoriteSet {
        self.tx.borrow().clone()
    }

    /// Current ids in iteration order (ascending).
    pub fn ids(&self) -> Vec<ArtworkId> {
        self.tx.borrow().iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Subscribe to changes. The receiver sees the current set immediately
    /// and is notified on every toggle.
    pub fn subscribe(&self) -> watch::Receiver<FavoriteSet> {
        self.tx.subscribe()
    }
}
