//! Static page content: problems, contests, leaderboard, activity and stats.
//!
//! The binary ships with [`Catalog::builtin`]; a JSON file with the same
//! shape can replace it. Missing sections default to empty.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::Result;

/// Lifecycle of a contest card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContestStatus {
    /// Running now; the card pulses
    Live,
    #[default]
    Upcoming,
    Ended,
}

impl ContestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ContestStatus::Live => "Live",
            ContestStatus::Upcoming => "Upcoming",
            ContestStatus::Ended => "Ended",
        }
    }

    /// Label of the contest's action button
    pub fn action(&self) -> &'static str {
        match self {
            ContestStatus::Live => "Join Now",
            ContestStatus::Upcoming => "Register",
            ContestStatus::Ended => "View Results",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contest {
    pub title: String,
    #[serde(default)]
    pub status: ContestStatus,
    /// Human-readable start time, shown verbatim
    pub starts: String,
    pub duration: String,
    #[serde(default)]
    pub participants: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user: String,
    pub score: u32,
    #[serde(default)]
    pub solved: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub text: String,
    pub when: String,
}

/// A dashboard stat. `value` is display text such as `"127"`, `"#42"` or
/// `"15 days"`; the count-up effect parses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Logo subtitle revealed by the typing effect
    pub subtitle: String,
    pub problems: Vec<Card>,
    pub contests: Vec<Contest>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub activity: Vec<ActivityItem>,
    pub stats: Vec<StatEntry>,
}

impl Catalog {
    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&text)?;
        tracing::info!(
            path = %path.display(),
            problems = catalog.problems.len(),
            contests = catalog.contests.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Content shipped with the application.
    pub fn builtin() -> Self {
        Self {
            subtitle: "Sharpen your skills, one problem at a time".to_string(),
            problems: vec![
                Card::new(
                    "Two Sum",
                    "Given an array of integers, return indices of the two numbers that add up to a target.",
                    "Easy",
                )
                .with_tags(["Array", "Hash Table"])
                .with_acceptance(49.1),
                Card::new(
                    "Add Two Numbers",
                    "Add two non-negative integers stored as reversed linked lists of digits.",
                    "Medium",
                )
                .with_tags(["Linked List", "Math"])
                .with_acceptance(40.2),
                Card::new(
                    "Longest Substring Without Repeating Characters",
                    "Find the length of the longest substring without repeated characters.",
                    "Medium",
                )
                .with_tags(["String", "Sliding Window"])
                .with_acceptance(33.8),
                Card::new(
                    "Median of Two Sorted Arrays",
                    "Find the median of two sorted arrays in logarithmic time.",
                    "Hard",
                )
                .with_tags(["Array", "Binary Search"])
                .with_acceptance(36.5),
                Card::new(
                    "Valid Parentheses",
                    "Determine whether a string of brackets is correctly nested.",
                    "Easy",
                )
                .with_tags(["String", "Stack"])
                .with_acceptance(40.7),
                Card::new(
                    "Merge k Sorted Lists",
                    "Merge k sorted linked lists into one sorted list.",
                    "Hard",
                )
                .with_tags(["Heap", "Divide and Conquer"])
                .with_acceptance(50.3),
                Card::new(
                    "Path Sum",
                    "Check whether a root-to-leaf path adds up to a given sum.",
                    "Easy",
                )
                .with_tags(["Tree", "DFS"])
                .with_acceptance(48.9),
                Card::new(
                    "Coin Change",
                    "Fewest coins needed to make up an amount.",
                    "Medium",
                )
                .with_tags(["Dynamic Programming"])
                .with_acceptance(42.6),
            ],
            contests: vec![
                Contest {
                    title: "Weekly Contest 412".to_string(),
                    status: ContestStatus::Live,
                    starts: "Started 45 minutes ago".to_string(),
                    duration: "1h 30m".to_string(),
                    participants: 18_432,
                },
                Contest {
                    title: "Biweekly Contest 138".to_string(),
                    status: ContestStatus::Upcoming,
                    starts: "Saturday, 14:30 UTC".to_string(),
                    duration: "1h 30m".to_string(),
                    participants: 6_210,
                },
                Contest {
                    title: "Weekly Contest 411".to_string(),
                    status: ContestStatus::Ended,
                    starts: "Last Sunday".to_string(),
                    duration: "1h 30m".to_string(),
                    participants: 24_987,
                },
            ],
            leaderboard: vec![
                LeaderboardEntry { rank: 1, user: "neal_wu".to_string(), score: 3_712, solved: 1_804 },
                LeaderboardEntry { rank: 2, user: "tourist".to_string(), score: 3_695, solved: 1_766 },
                LeaderboardEntry { rank: 3, user: "jiangly".to_string(), score: 3_650, solved: 1_702 },
                LeaderboardEntry { rank: 4, user: "ecnerwala".to_string(), score: 3_511, solved: 1_590 },
                LeaderboardEntry { rank: 5, user: "you".to_string(), score: 1_842, solved: 127 },
            ],
            activity: vec![
                ActivityItem { text: "Solved Two Sum".to_string(), when: "2 hours ago".to_string() },
                ActivityItem { text: "Registered for Biweekly Contest 138".to_string(), when: "yesterday".to_string() },
                ActivityItem { text: "Attempted Median of Two Sorted Arrays".to_string(), when: "3 days ago".to_string() },
            ],
            stats: vec![
                StatEntry { label: "Problems Solved".to_string(), value: "127".to_string() },
                StatEntry { label: "Global Rank".to_string(), value: "#2847".to_string() },
                StatEntry { label: "Current Streak".to_string(), value: "15 days".to_string() },
                StatEntry { label: "Contests Joined".to_string(), value: "23".to_string() },
            ],
        }
    }
}
