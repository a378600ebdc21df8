//! Line-based rendering of collection records.
//!
//! Everything here returns strings so the shell and the one-shot commands
//! share one look.

use crate::error::CollectionError;
use crate::favorites::FavoritesStore;
use crate::models::{Artwork, Exhibition};
use crate::state::LoadState;

/// Line width for separators.
const LINE_WIDTH: usize = 60;

const HEART: &str = "♥";

/// A title over a separator.
///
/// ```text
/// EXHIBITIONS
/// ════════════════════════════════════════════════════════════
/// ```
pub fn header(title: &str) -> String {
    format!("{}\n{}", title, "═".repeat(LINE_WIDTH))
}

/// `[id] Title  (Jan 12 - Mar 3)`
pub fn exhibition_line(exhibition: &Exhibition) -> String {
    let dates = match exhibition.formatted_end_date() {
        Some(end) => format!("{} - {}", exhibition.formatted_begin_date(), end),
        None => exhibition.formatted_begin_date(),
    };
    format!("[{}] {}  ({})", exhibition.id, exhibition.title, dates)
}

/// `♥ [id] Title, Artist (role)` with the heart only for favorites.
pub fn artwork_line(artwork: &Artwork, favorite: bool) -> String {
    let marker = if favorite { HEART } else { " " };
    match artwork.artist_line() {
        Some(artists) => format!("{} [{}] {}, {}", marker, artwork.id, artwork.title, artists),
        None => format!("{} [{}] {}", marker, artwork.id, artwork.title),
    }
}

/// Multi-line detail view of one artwork.
pub fn artwork_detail(artwork: &Artwork, favorite: bool) -> String {
    let mut lines = vec![header(&artwork.title)];
    let mut field = |label: &str, value: Option<&str>| {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            lines.push(format!("  {:<10} {}", label, value));
        }
    };
    field("Id:", Some(artwork.id.to_string().as_str()));
    field("Artist:", artwork.artist_line().as_deref());
    field("Dated:", artwork.dated.as_deref());
    field("Medium:", artwork.medium.as_deref());
    field("Division:", artwork.division.as_deref());
    field("Image:", artwork.primary_image_url());
    field("Favorite:", favorite.then_some(HEART));
    if let Some(description) = artwork.description.as_deref() {
        lines.push(String::new());
        lines.push(description.trim().to_string());
    }
    lines.join("\n")
}

/// One line per artwork, hearts looked up in `favorites`.
pub fn artwork_list(artworks: &[Artwork], favorites: &FavoritesStore) -> String {
    if artworks.is_empty() {
        return "  (no artworks)".to_string();
    }
    artworks
        .iter()
        .map(|artwork| artwork_line(artwork, favorites.is_favorite(artwork.id)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn exhibition_list(exhibitions: &[Exhibition]) -> String {
    if exhibitions.is_empty() {
        return "  (no exhibitions)".to_string();
    }
    exhibitions
        .iter()
        .map(exhibition_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// User-facing error line.
pub fn error_line(err: &CollectionError) -> String {
    format!("✗ {} [{}]", err.user_message(), err.error_code())
}

/// Status line for a screen that is not showing items.
pub fn status_line<T>(state: &LoadState<T>) -> Option<String> {
    match state {
        LoadState::NotStarted => Some("  (nothing loaded)".to_string()),
        LoadState::InProgress => Some("  loading...".to_string()),
        LoadState::Failed(err) => Some(error_line(err)),
        LoadState::Loaded(_) => None,
    }
}
