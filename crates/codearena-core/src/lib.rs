//! CodeArena Core Library
//!
//! Platform-free logic behind the CodeArena problem and contest browser.
//!
//! ## Overview
//!
//! The page renders a fixed [`Catalog`] of problems, contests, leaderboard
//! rows and stats. The only stateful behavior is the [`ViewFilter`], which
//! decides which problem cards are visible from a search query and a
//! difficulty selection. Navigation and the decorative effects are modeled
//! here as small value types so the UI layer only has to drive timers.
//!
//! ## Quick Start
//!
//! ```
//! use codearena_core::{Catalog, ViewFilter};
//!
//! let catalog = Catalog::builtin();
//! let mut filter = ViewFilter::new(catalog.problems);
//!
//! filter.on_query_change("two");
//! for card in filter.visible_cards() {
//!     println!("{} ({})", card.title, card.difficulty);
//! }
//! ```

pub mod card;
pub mod catalog;
pub mod effects;
pub mod error;
pub mod filter;
pub mod logging;
pub mod nav;

// Re-exports
pub use card::{Card, ALL_DIFFICULTIES, DIFFICULTY_OPTIONS};
pub use catalog::{ActivityItem, Catalog, Contest, ContestStatus, LeaderboardEntry, StatEntry};
pub use error::{Error, Result};
pub use filter::{matches_difficulty, matches_query, FilterMode, FilterState, ViewFilter};
pub use nav::{Navigation, Page};
