//! Async screen controllers.
//!
//! Each screen owns its own [`ScreenState`] inside a `watch` channel, so a
//! renderer can subscribe to every transition. Screens are independent of
//! each other; the favorites store is the only state they share.
//!
//! - [`BrowseScreen`]: exhibitions list
//! - [`ExhibitionScreen`]: artworks of one exhibition
//! - [`FavoritesScreen`]: hydrated favorites
//! - [`SearchScreen`]: debounced remote search

mod browse;
mod exhibition;
mod favorites;
mod search;

pub use browse::BrowseScreen;
pub use exhibition::ExhibitionScreen;
pub use favorites::FavoritesScreen;
pub use search::SearchScreen;

use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

use crate::error::CollectionResult;
use crate::state::{FetchTicket, LoadState, ScreenState, Searchable};

/// Observable presentation state of one screen.
///
/// Cloning yields another handle onto the same state.
pub struct Screen<T> {
    state: Arc<watch::Sender<ScreenState<T>>>,
}

impl<T> Clone for Screen<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> Default for Screen<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Screen<T> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ScreenState::new());
        Self { state: Arc::new(tx) }
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<ScreenState<T>> {
        self.state.subscribe()
    }

    /// Start an activation and return its ticket.
    pub fn begin(&self) -> FetchTicket {
        let mut issued = FetchTicket::default();
        self.state.send_modify(|state| issued = state.begin());
        issued
    }

    /// Commit a result for `ticket`; stale tickets are dropped without
    /// notifying subscribers.
    pub fn commit(&self, ticket: FetchTicket, result: CollectionResult<Vec<T>>) -> bool {
        self.state
            .send_if_modified(|state| state.commit(ticket, result))
    }

    /// Run one activation: begin, await `fetch`, commit.
    pub async fn run<F>(&self, fetch: F) -> bool
    where
        F: Future<Output = CollectionResult<Vec<T>>>,
    {
        let ticket = self.begin();
        let result = fetch.await;
        self.commit(ticket, result)
    }

    /// Back to `NotStarted`; in-flight results will be discarded.
    pub fn reset(&self) {
        self.state.send_modify(ScreenState::reset);
    }

    /// Set the local filter text.
    pub fn set_filter(&self, filter: &str) {
        self.state
            .send_if_modified(|state| {
                if state.filter() == filter {
                    return false;
                }
                state.set_filter(filter);
                true
            });
    }

    /// Run `f` against the current state.
    pub fn with_state<R>(&self, f: impl FnOnce(&ScreenState<T>) -> R) -> R {
        f(&self.state.borrow())
    }
}

impl<T: Clone> Screen<T> {
    pub fn load_state(&self) -> LoadState<T> {
        self.state.borrow().load_state().clone()
    }
}

impl<T: Clone + Searchable> Screen<T> {
    /// The filtered, loaded items as owned values.
    pub fn displayed(&self) -> Vec<T> {
        self.state
            .borrow()
            .displayed()
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Wait until `rx` shows a terminal load state.
///
/// Returns `None` if the screen was dropped first.
pub async fn wait_for_terminal<T: Clone>(
    rx: &mut watch::Receiver<ScreenState<T>>,
) -> Option<LoadState<T>> {
    loop {
        {
            let state = rx.borrow_and_update();
            if state.load_state().is_terminal() {
                return Some(state.load_state().clone());
            }
        }
        if rx.changed().await.is_err() {
            return None;
        }
    }
}
