use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;

use super::Screen;
use crate::config::DEFAULT_SEARCH_DEBOUNCE_MS;
use crate::models::Artwork;
use crate::source::CollectionSource;

/// Query text and the debounce timer armed for it.
#[derive(Default)]
struct PendingSearch {
    query: String,
    /// Bumped on every keystroke; a timer may only dispatch for its own
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

struct SearchInner {
    source: Arc<dyn CollectionSource>,
    screen: Screen<Artwork>,
    debounce: Duration,
    pending: Mutex<PendingSearch>,
}

impl SearchInner {
    fn pending(&self) -> MutexGuard<'_, PendingSearch> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start the fetch for `query` if no keystroke arrived since the timer
    /// for `generation` was armed. Returns whether a fetch was dispatched.
    ///
    /// The pending lock is held across `begin`, so a concurrent
    /// `set_query` either lands before (and this is a no-op) or after (and
    /// its reset or next `begin` makes the ticket stale).
    fn dispatch_if_current(self: &Arc<Self>, generation: u64, query: String) -> bool {
        let pending = self.pending();
        if pending.generation != generation {
            tracing::debug!(query = %query, "Dropping superseded search timer");
            return false;
        }
        let ticket = self.screen.begin();
        drop(pending);

        tracing::debug!(query = %query, seq = ticket.seq(), "Dispatching search");
        let inner = Arc::clone(self);
        tokio::spawn(async move {
            let result = inner.source.search_artworks(&query).await;
            inner.screen.commit(ticket, result);
        });
        true
    }
}

impl Drop for SearchInner {
    fn drop(&mut self) {
        let pending = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(timer) = pending.timer.take() {
            timer.abort();
        }
    }
}

/// Remote artwork search driven by a debounced query.
///
/// Every call to [`SearchScreen::set_query`] restarts the quiet-period timer;
/// only a timer that survives the whole window dispatches a search. A
/// dispatched request is never aborted. Its result is dropped at commit time
/// if a newer search started (or the query was cleared) in the meantime.
/// Dropping the last handle cancels an armed timer.
#[derive(Clone)]
pub struct SearchScreen {
    inner: Arc<SearchInner>,
}

impl SearchScreen {
    pub fn new(source: Arc<dyn CollectionSource>) -> Self {
        Self::with_debounce(source, Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS))
    }

    pub fn with_debounce(source: Arc<dyn CollectionSource>, debounce: Duration) -> Self {
        Self {
            inner: Arc::new(SearchInner {
                source,
                screen: Screen::new(),
                debounce,
                pending: Mutex::new(PendingSearch::default()),
            }),
        }
    }

    pub fn screen(&self) -> &Screen<Artwork> {
        &self.inner.screen
    }

    pub fn debounce(&self) -> Duration {
        self.inner.debounce
    }

    /// The query text as last typed.
    pub fn query(&self) -> String {
        self.inner.pending().query.clone()
    }

    /// Record a keystroke's worth of query text.
    ///
    /// A blank query cancels any armed timer and puts the screen back to
    /// `NotStarted` without a request.
    pub fn set_query(&self, text: &str) {
        let mut pending = self.inner.pending();
        if let Some(timer) = pending.timer.take() {
            timer.abort();
        }
        pending.generation += 1;
        pending.query = text.to_string();

        let query = text.trim().to_string();
        if query.is_empty() {
            tracing::debug!("Search query cleared");
            self.inner.screen.reset();
            return;
        }

        // Guard: only arm the timer if a tokio runtime is available
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No tokio runtime; search not scheduled");
            return;
        };

        let generation = pending.generation;
        let debounce = self.inner.debounce;
        let inner: Weak<SearchInner> = Arc::downgrade(&self.inner);
        pending.timer = Some(handle.spawn(async move {
            tokio::time::sleep(debounce).await;
            if let Some(inner) = inner.upgrade() {
                inner.dispatch_if_current(generation, query);
            }
        }));
    }

    /// Whether a debounce timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.inner
            .pending()
            .timer
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }
}
