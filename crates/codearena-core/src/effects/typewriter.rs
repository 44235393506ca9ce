//! Per-character reveal of the logo subtitle.

use std::time::Duration;

/// Delay before the first character appears
pub const TYPE_START_DELAY: Duration = Duration::from_millis(1000);

/// Delay between characters
pub const TYPE_CHAR_DELAY: Duration = Duration::from_millis(100);

/// Reveals `text` one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    /// The prefix revealed so far
    pub fn visible_text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    /// Reveal the next character. Returns `None` when nothing is left.
    pub fn tick(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.revealed += 1;
        Some(self.visible_text())
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_growing_prefixes() {
        let frames: Vec<String> = Typewriter::new("abc").collect();
        assert_eq!(frames, vec!["a", "ab", "abc"]);
    }

    #[test]
    fn starts_empty() {
        let writer = Typewriter::new("hello");
        assert_eq!(writer.visible_text(), "");
        assert!(!writer.is_done());
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut writer = Typewriter::new("");
        assert!(writer.is_done());
        assert_eq!(writer.tick(), None);
    }

    #[test]
    fn steps_by_character_not_byte() {
        let frames: Vec<String> = Typewriter::new("né✓").collect();
        assert_eq!(frames, vec!["n", "né", "né✓"]);
    }
}
