//! Favorites hydration: resolve favorited ids into full artwork records.
//!
//! All fetches of one pass are dispatched together and joined in request
//! order, so the output follows the set's iteration order no matter which
//! response arrives first. A failed fetch drops that id from the output and
//! is recorded in the report; it never fails the pass.

use futures::future::join_all;

use crate::error::CollectionError;
use crate::favorites::FavoriteSet;
use crate::models::{Artwork, ArtworkId};
use crate::source::CollectionSource;

/// Outcome of one hydration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HydrationReport {
    /// Ids requested, in iteration order
    pub requested: Vec<ArtworkId>,
    /// Records that resolved, in the same relative order as `requested`
    pub records: Vec<Artwork>,
    /// Ids that did not resolve and why
    pub failures: Vec<(ArtworkId, CollectionError)>,
}

impl HydrationReport {
    /// Every requested id resolved.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Some ids resolved and some did not.
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty() && !self.records.is_empty()
    }

    /// Nothing resolved and every failure was a transport failure, i.e. the
    /// collection could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        !self.failures.is_empty()
            && self.records.is_empty()
            && self.failures.iter().all(|(_, err)| err.is_transport())
    }

    pub fn failed_ids(&self) -> Vec<ArtworkId> {
        self.failures.iter().map(|(id, _)| *id).collect()
    }

    /// A short note for a warning banner, if anything failed.
    pub fn warning(&self) -> Option<String> {
        if self.is_complete() {
            return None;
        }
        if self.is_unreachable() {
            return Some("Could not reach the collection; favorites are unavailable.".to_string());
        }
        Some(format!(
            "{} of {} favorites could not be loaded.",
            self.failures.len(),
            self.requested.len()
        ))
    }
}

/// Fetch a full record for every id in `favorites`.
///
/// `favorites` is the snapshot taken when the pass starts; toggles made while
/// the pass is in flight show up in the next pass.
pub async fn hydrate<S>(source: &S, favorites: &FavoriteSet) -> HydrationReport
where
    S: CollectionSource + ?Sized,
{
    let requested: Vec<ArtworkId> = favorites.iter().copied().collect();
    tracing::debug!(count = requested.len(), "Hydrating favorites");

    let results = join_all(requested.iter().map(|&id| fetch_one(source, id))).await;

    let mut report = HydrationReport {
        requested,
        ..Default::default()
    };
    for (id, result) in report.requested.iter().copied().zip(results) {
        match result {
            Ok(artwork) => report.records.push(artwork),
            Err(err) => {
                tracing::warn!(
                    artwork_id = %id,
                    code = err.error_code(),
                    error = %err,
                    "Dropping favorite that failed to hydrate"
                );
                report.failures.push((id, err));
            }
        }
    }

    tracing::info!(
        requested = report.requested.len(),
        loaded = report.records.len(),
        failed = report.failures.len(),
        "Hydration pass finished"
    );
    report
}

async fn fetch_one<S>(source: &S, id: ArtworkId) -> Result<Artwork, CollectionError>
where
    S: CollectionSource + ?Sized,
{
    let artwork = source.get_artwork(id).await?;
    if artwork.id != id {
        return Err(CollectionError::Decode {
            what: "artwork",
            message: format!("requested {} but received {}", id, artwork.id),
        });
    }
    Ok(artwork)
}
