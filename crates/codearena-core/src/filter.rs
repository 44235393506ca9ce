//! View Filter: search and difficulty filtering over a fixed set of cards.
//!
//! The filter owns the cards, one visibility flag per card, and the last
//! values of the two inputs. Each input event recomputes every flag from
//! scratch; nothing is diffed or cached.
//!
//! ## Composition
//!
//! In [`FilterMode::Independent`] (the default) each handler uses only its
//! own predicate, so the most recent event decides visibility:
//!
//! ```
//! use codearena_core::{Card, ViewFilter};
//!
//! let mut filter = ViewFilter::new(vec![
//!     Card::new("Two Sum", "Find two numbers adding up to a target", "Easy"),
//!     Card::new("Median of Two Sorted Arrays", "Find the median", "Hard"),
//! ]);
//!
//! filter.on_difficulty_change("Hard");
//! assert!(!filter.is_visible(0));
//!
//! // The query handler does not intersect with the difficulty filter.
//! filter.on_query_change("sum");
//! assert!(filter.is_visible(0));
//! ```
//!
//! [`FilterMode::Combined`] ANDs both stored predicates on every event.

use crate::card::{Card, ALL_DIFFICULTIES};

/// Lowercased form of [`ALL_DIFFICULTIES`]
const NO_DIFFICULTY_FILTER: &str = "all difficulties";

/// Current values of the search box and the difficulty selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub difficulty: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            difficulty: ALL_DIFFICULTIES.to_string(),
        }
    }
}

/// How the two predicates combine when an input changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Each handler applies only its own predicate
    #[default]
    Independent,
    /// Every recompute requires both predicates to hold
    Combined,
}

/// Case-insensitive substring match against title or description.
///
/// `query_lower` must already be lowercased.
pub fn matches_query(card: &Card, query_lower: &str) -> bool {
    card.title.to_lowercase().contains(query_lower)
        || card.description.to_lowercase().contains(query_lower)
}

/// Case-insensitive difficulty match; the "all difficulties" sentinel
/// matches every card.
///
/// `difficulty_lower` must already be lowercased.
pub fn matches_difficulty(card: &Card, difficulty_lower: &str) -> bool {
    difficulty_lower == NO_DIFFICULTY_FILTER
        || card.difficulty.to_lowercase() == difficulty_lower
}

/// Visibility of a fixed card collection driven by two inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewFilter {
    cards: Vec<Card>,
    visible: Vec<bool>,
    state: FilterState,
    mode: FilterMode,
}

impl ViewFilter {
    /// Create a filter with every card visible.
    pub fn new(cards: Vec<Card>) -> Self {
        Self::with_mode(cards, FilterMode::default())
    }

    pub fn with_mode(cards: Vec<Card>, mode: FilterMode) -> Self {
        let visible = vec![true; cards.len()];
        Self {
            cards,
            visible,
            state: FilterState::default(),
            mode,
        }
    }

    /// Search box changed. The value is used as-is, without trimming.
    pub fn on_query_change(&mut self, new_query: &str) {
        self.state.query = new_query.to_string();
        let query = new_query.to_lowercase();

        match self.mode {
            FilterMode::Independent => {
                self.recompute(|card| matches_query(card, &query));
            }
            FilterMode::Combined => {
                let difficulty = self.state.difficulty.to_lowercase();
                self.recompute(|card| {
                    matches_query(card, &query) && matches_difficulty(card, &difficulty)
                });
            }
        }

        tracing::debug!(
            query = %new_query,
            visible = self.visible_count(),
            total = self.cards.len(),
            "Applied search query"
        );
    }

    /// Difficulty selector changed.
    pub fn on_difficulty_change(&mut self, new_difficulty: &str) {
        self.state.difficulty = new_difficulty.to_string();
        let difficulty = new_difficulty.to_lowercase();

        match self.mode {
            FilterMode::Independent => {
                self.recompute(|card| matches_difficulty(card, &difficulty));
            }
            FilterMode::Combined => {
                let query = self.state.query.to_lowercase();
                self.recompute(|card| {
                    matches_query(card, &query) && matches_difficulty(card, &difficulty)
                });
            }
        }

        tracing::debug!(
            difficulty = %new_difficulty,
            visible = self.visible_count(),
            total = self.cards.len(),
            "Applied difficulty filter"
        );
    }

    fn recompute(&mut self, predicate: impl Fn(&Card) -> bool) {
        for (card, visible) in self.cards.iter().zip(self.visible.iter_mut()) {
            *visible = predicate(card);
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Visibility of the card at `index`; out-of-range indices are hidden.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// One flag per card, in card order.
    pub fn visibility(&self) -> &[bool] {
        &self.visible
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .zip(self.visible.iter())
            .filter_map(|(card, visible)| visible.then_some(card))
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }
}
