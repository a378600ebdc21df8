//! Presentation state shared by every list screen.
//!
//! - [`LoadState`]: tagged status of a fetch-and-display cycle
//! - [`ScreenState`]: load status + local filter + fetch sequence counter
//! - [`Searchable`] / [`filter_items`]: the client-side text filter

mod filter;
mod load_state;
mod screen_state;

pub use filter::{filter_items, Searchable};
pub use load_state::LoadState;
pub use screen_state::{FetchTicket, ScreenState};
