//! Error taxonomy for collection access.
//!
//! | Variant | Cause |
//! |---------|-------|
//! | `Transport` | Network unreachable, timeout, non-2xx status |
//! | `Decode` | Body does not match the expected record shape |
//! | `NotFound` | Single-object fetch for an id the collection does not know |
//!
//! List operations surface any of these as one failed load for the whole
//! screen. Hydration swallows them per item.

use thiserror::Error;

use crate::models::ArtworkId;
use crate::traits::HttpError;

/// Result type for collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Errors returned by [`crate::source::CollectionSource`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The request did not produce a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    /// The response body did not match the expected shape.
    #[error("failed to decode {what}: {message}")]
    Decode { what: &'static str, message: String },

    /// The collection has no object with this id.
    #[error("artwork {id} not found")]
    NotFound { id: ArtworkId },
}

impl CollectionError {
    pub(crate) fn decode(what: &'static str, err: serde_json::Error) -> Self {
        CollectionError::Decode {
            what,
            message: err.to_string(),
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CollectionError::Transport(HttpError::Timeout(_)) => "TRANSPORT_TIMEOUT",
            CollectionError::Transport(HttpError::ServerError { .. }) => "TRANSPORT_STATUS",
            CollectionError::Transport(_) => "TRANSPORT",
            CollectionError::Decode { .. } => "DECODE",
            CollectionError::NotFound { .. } => "NOT_FOUND",
        }
    }

    /// Generic message for an error indicator.
    pub fn user_message(&self) -> &'static str {
        match self {
            CollectionError::Transport(_) => "Unable to reach the collection. Check your connection.",
            CollectionError::Decode { .. } => "The collection returned data this app cannot read.",
            CollectionError::NotFound { .. } => "This artwork is no longer in the collection.",
        }
    }

    /// Whether this is a transport-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, CollectionError::Transport(_))
    }

    /// Whether the remote reported the record as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CollectionError::NotFound { .. })
    }
}
