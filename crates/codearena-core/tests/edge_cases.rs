//! Edge case and boundary condition tests
//!
//! These tests exercise the public API the desktop app uses: catalog
//! loading, navigation parsing and filtering over unusual inputs.

use std::io::Write;

use codearena_core::effects::{CountUp, LoadingButton, Typewriter};
use codearena_core::{Card, Catalog, Error, Page, ViewFilter};

// ============================================================================
// Catalog Files
// ============================================================================

#[test]
fn test_load_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"{{
            "subtitle": "Practice daily",
            "problems": [
                {{"title": "Two Sum", "description": "pairs", "difficulty": "Easy", "tags": ["Array"]}}
            ],
            "stats": [{{"label": "Solved", "value": "#12"}}]
        }}"##
    )
    .unwrap();

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.subtitle, "Practice daily");
    assert_eq!(catalog.problems[0].tags, vec!["Array"]);
    assert_eq!(catalog.stats[0].value, "#12");
    assert!(catalog.contests.is_empty());
}

#[test]
fn test_load_missing_catalog_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_empty_catalog_object() {
    let catalog = Catalog::from_json("{}").unwrap();
    assert_eq!(catalog, Catalog::default());
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_filter_over_builtin_catalog() {
    let mut filter = ViewFilter::new(Catalog::builtin().problems);
    let total = filter.cards().len();

    filter.on_query_change("TWO");
    assert!(filter.visible_cards().all(|c| {
        c.title.to_lowercase().contains("two") || c.description.to_lowercase().contains("two")
    }));
    assert!(filter.visible_count() > 0);

    filter.on_difficulty_change("All Difficulties");
    assert_eq!(filter.visible_count(), total);
}

#[test]
fn test_unicode_query() {
    let mut filter = ViewFilter::new(vec![Card::new("Straße", "Ärger im Büro", "Easy")]);
    filter.on_query_change("ÄRGER");
    assert!(filter.is_visible(0));
}

#[test]
fn test_very_long_query_hides_everything() {
    let mut filter = ViewFilter::new(Catalog::builtin().problems);
    filter.on_query_change(&"a".repeat(10_000));
    assert_eq!(filter.visible_count(), 0);
}

// ============================================================================
// Navigation and effects
// ============================================================================

#[test]
fn test_page_keys_are_case_sensitive() {
    assert!("Problems".parse::<Page>().is_err());
    assert_eq!("problems".parse::<Page>().unwrap(), Page::Problems);
}

#[test]
fn test_builtin_stats_all_animate() {
    for stat in Catalog::builtin().stats {
        let counter = CountUp::parse(&stat.value).unwrap();
        assert_eq!(counter.final_text(), stat.value);
    }
}

#[test]
fn test_builtin_contest_actions_trigger_loading_when_expected() {
    for contest in Catalog::builtin().contests {
        let mut button = LoadingButton::new(contest.status.action());
        let expected = contest.status != codearena_core::ContestStatus::Ended;
        assert_eq!(button.press(), expected);
    }
}

#[test]
fn test_typewriter_reveals_builtin_subtitle() {
    let subtitle = Catalog::builtin().subtitle;
    let last = Typewriter::new(&subtitle).last().unwrap();
    assert_eq!(last, subtitle);
}
