//! Property-based tests for ViewFilter
//!
//! Uses proptest to verify the visibility rules of the two input handlers.

use codearena_core::{Card, FilterMode, ViewFilter, ALL_DIFFICULTIES};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z ]{0,24}").expect("valid regex")
}

fn difficulty_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Easy".to_string()),
        Just("easy".to_string()),
        Just("Medium".to_string()),
        Just("HARD".to_string()),
        Just("Hard".to_string()),
    ]
}

fn card_strategy() -> impl Strategy<Value = Card> {
    (text_strategy(), text_strategy(), difficulty_strategy())
        .prop_map(|(title, description, difficulty)| Card::new(title, description, difficulty))
}

fn cards_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card_strategy(), 0..20)
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z ]{0,4}").expect("valid regex")
}

fn selection_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(ALL_DIFFICULTIES.to_string()),
        1 => Just("all difficulties".to_string()),
        3 => difficulty_strategy(),
    ]
}

/// Input events in the order a user might fire them
#[derive(Debug, Clone)]
enum Event {
    Query(String),
    Difficulty(String),
}

fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(
        prop_oneof![
            query_strategy().prop_map(Event::Query),
            selection_strategy().prop_map(Event::Difficulty),
        ],
        1..12,
    )
}

fn apply(filter: &mut ViewFilter, event: &Event) {
    match event {
        Event::Query(q) => filter.on_query_change(q),
        Event::Difficulty(d) => filter.on_difficulty_change(d),
    }
}

fn query_holds(card: &Card, query: &str) -> bool {
    let q = query.to_lowercase();
    card.title.to_lowercase().contains(&q) || card.description.to_lowercase().contains(&q)
}

fn difficulty_holds(card: &Card, difficulty: &str) -> bool {
    difficulty.eq_ignore_ascii_case("all difficulties")
        || card.difficulty.to_lowercase() == difficulty.to_lowercase()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A card is visible after a query iff the query is a case-insensitive
    /// substring of its title or description
    #[test]
    fn query_visibility_matches_substring(
        cards in cards_strategy(),
        events in events_strategy(),
        query in query_strategy(),
    ) {
        let mut filter = ViewFilter::new(cards.clone());
        for event in &events {
            apply(&mut filter, event);
        }
        filter.on_query_change(&query);

        for (i, card) in cards.iter().enumerate() {
            prop_assert_eq!(filter.is_visible(i), query_holds(card, &query));
        }
    }

    /// Empty query shows every card regardless of history
    #[test]
    fn empty_query_shows_all(cards in cards_strategy(), events in events_strategy()) {
        let mut filter = ViewFilter::new(cards.clone());
        for event in &events {
            apply(&mut filter, event);
        }
        filter.on_query_change("");
        prop_assert_eq!(filter.visible_count(), cards.len());
    }

    /// A card is visible after a difficulty selection iff labels match
    #[test]
    fn difficulty_visibility_matches_label(
        cards in cards_strategy(),
        events in events_strategy(),
        selection in selection_strategy(),
    ) {
        let mut filter = ViewFilter::new(cards.clone());
        for event in &events {
            apply(&mut filter, event);
        }
        filter.on_difficulty_change(&selection);

        for (i, card) in cards.iter().enumerate() {
            prop_assert_eq!(filter.is_visible(i), difficulty_holds(card, &selection));
        }
    }

    /// The sentinel shows every card regardless of history
    #[test]
    fn all_difficulties_shows_all(cards in cards_strategy(), events in events_strategy()) {
        let mut filter = ViewFilter::new(cards.clone());
        for event in &events {
            apply(&mut filter, event);
        }
        filter.on_difficulty_change(ALL_DIFFICULTIES);
        prop_assert_eq!(filter.visible_count(), cards.len());
    }

    /// Repeating an event does not change the result
    #[test]
    fn handlers_are_idempotent(cards in cards_strategy(), event in events_strategy()) {
        let mut once = ViewFilter::new(cards.clone());
        let mut twice = ViewFilter::new(cards);
        for e in &event {
            apply(&mut once, e);
            apply(&mut twice, e);
            apply(&mut twice, e);
        }
        prop_assert_eq!(once.visibility(), twice.visibility());
    }

    /// A card's visibility depends only on its own attributes
    #[test]
    fn decisions_are_per_card(
        cards in cards_strategy(),
        extra in card_strategy(),
        events in events_strategy(),
    ) {
        let mut alone = ViewFilter::new(cards.clone());
        let mut with_extra = ViewFilter::new({
            let mut all = vec![extra];
            all.extend(cards.iter().cloned());
            all
        });
        for event in &events {
            apply(&mut alone, event);
            apply(&mut with_extra, event);
        }
        prop_assert_eq!(alone.visibility(), &with_extra.visibility()[1..]);
    }

    /// In combined mode both stored predicates hold for every visible card
    #[test]
    fn combined_mode_is_intersection(cards in cards_strategy(), events in events_strategy()) {
        let mut filter = ViewFilter::with_mode(cards.clone(), FilterMode::Combined);
        for event in &events {
            apply(&mut filter, event);
        }
        let state = filter.state().clone();
        for (i, card) in cards.iter().enumerate() {
            let expected = query_holds(card, &state.query) && difficulty_holds(card, &state.difficulty);
            prop_assert_eq!(filter.is_visible(i), expected);
        }
    }
}

/// Scenario: difficulty filter hides a card, then a matching query shows it again
#[test]
fn query_reveals_card_hidden_by_difficulty() {
    let mut filter = ViewFilter::new(vec![
        Card::new("Two Sum", "Find two numbers", "Easy"),
        Card::new("Merge k Sorted Lists", "Heap based merge", "Hard"),
    ]);

    filter.on_difficulty_change("Hard");
    assert_eq!(filter.visibility(), &[false, true]);

    filter.on_query_change("sum");
    assert_eq!(filter.visibility(), &[true, false]);
}
