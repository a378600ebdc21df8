use crate::error::CollectionError;

/// Status of one fetch-and-display cycle.
///
/// `Loaded` and `Failed` are terminal for an activation; a new activation
/// starts over at `InProgress`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    NotStarted,
    InProgress,
    Loaded(Vec<T>),
    Failed(CollectionError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::NotStarted
    }
}

impl<T> LoadState<T> {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, LoadState::InProgress)
    }

    /// Whether the cycle has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Loaded(_) | LoadState::Failed(_))
    }

    /// Loaded items, if any.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            LoadState::Loaded(items) => Some(items),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CollectionError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Short label for status lines and logs.
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::NotStarted => "idle",
            LoadState::InProgress => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}
