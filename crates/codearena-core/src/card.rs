//! Problem cards and the difficulty labels they carry.

use serde::{Deserialize, Serialize};

/// Label of the difficulty selector option that disables filtering.
pub const ALL_DIFFICULTIES: &str = "All Difficulties";

/// Options offered by the difficulty selector, in display order.
pub const DIFFICULTY_OPTIONS: [&str; 4] = [ALL_DIFFICULTIES, "Easy", "Medium", "Hard"];

/// A problem card as rendered on the Problems page.
///
/// The filter only reads `title`, `description` and `difficulty`; the
/// remaining fields are display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    /// Free-form label, usually one of "Easy", "Medium", "Hard"
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Acceptance rate in percent
    #[serde(default)]
    pub acceptance: Option<f32>,
}

impl Card {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            difficulty: difficulty.into(),
            tags: Vec::new(),
            acceptance: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_acceptance(mut self, percent: f32) -> Self {
        self.acceptance = Some(percent);
        self
    }

    /// CSS modifier class for the difficulty badge (`difficulty easy`, ...).
    pub fn difficulty_class(&self) -> String {
        format!("difficulty {}", self.difficulty.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_display_fields() {
        let card = Card::new("Two Sum", "Find two numbers", "Easy")
            .with_tags(["array", "hash-table"])
            .with_acceptance(49.5);
        assert_eq!(card.tags, vec!["array", "hash-table"]);
        assert_eq!(card.acceptance, Some(49.5));
    }

    #[test]
    fn difficulty_class_is_lowercase() {
        let card = Card::new("Median of Two Sorted Arrays", "", "Hard");
        assert_eq!(card.difficulty_class(), "difficulty hard");
    }

    #[test]
    fn display_fields_are_optional_in_json() {
        let card: Card = serde_json::from_str(
            r#"{"title":"Two Sum","description":"d","difficulty":"Easy"}"#,
        )
        .unwrap();
        assert!(card.tags.is_empty());
        assert_eq!(card.acceptance, None);
    }
}
