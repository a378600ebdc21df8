use crate::error::CollectionResult;

use super::filter::{filter_items, Searchable};
use super::load_state::LoadState;

/// Proof that a fetch was started at a given point in a screen's history.
///
/// Only the ticket from the most recent [`ScreenState::begin`] can commit.
/// The default ticket (seq 0) is never current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Presentation state of one screen: load status, local filter text, and
/// the fetch sequence counter that guards against stale completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenState<T> {
    load: LoadState<T>,
    filter: String,
    /// Sequence number of the latest started fetch
    seq: u64,
}

impl<T> Default for ScreenState<T> {
    fn default() -> Self {
        Self {
            load: LoadState::NotStarted,
            filter: String::new(),
            seq: 0,
        }
    }
}

impl<T> ScreenState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new activation: move to `InProgress` and issue its ticket.
    /// Any ticket issued earlier becomes stale.
    pub fn begin(&mut self) -> FetchTicket {
        self.seq += 1;
        self.load = LoadState::InProgress;
        FetchTicket { seq: self.seq }
    }

    /// Commit a fetch result. Returns `false` and leaves the state alone if
    /// a newer fetch has been started (or the screen was reset) since
    /// `ticket` was issued.
    pub fn commit(&mut self, ticket: FetchTicket, result: CollectionResult<Vec<T>>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                ticket = ticket.seq,
                latest = self.seq,
                "Discarding stale fetch result"
            );
            return false;
        }
        self.load = match result {
            Ok(items) => LoadState::Loaded(items),
            Err(err) => {
                tracing::warn!(code = err.error_code(), error = %err, "Screen load failed");
                LoadState::Failed(err)
            }
        };
        true
    }

    /// Go back to `NotStarted`, invalidating any in-flight fetch.
    pub fn reset(&mut self) {
        self.seq += 1;
        self.load = LoadState::NotStarted;
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.seq == self.seq
    }

    pub fn load_state(&self) -> &LoadState<T> {
        &self.load
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Set the local filter text. Never triggers a fetch.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }
}

impl<T: Searchable> ScreenState<T> {
    /// Loaded items passing the filter, in loaded order. Empty unless loaded.
    pub fn displayed(&self) -> Vec<&T> {
        match &self.load {
            LoadState::Loaded(items) => filter_items(items, &self.filter),
            LoadState::NotStarted | LoadState::InProgress | LoadState::Failed(_) => Vec::new(),
        }
    }
}
