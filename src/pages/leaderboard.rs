//! Leaderboard page - ranked rows with hover highlight.

use dioxus::prelude::*;

use crate::context::use_catalog;

#[component]
pub fn Leaderboard() -> Element {
    let catalog = use_catalog();
    let entries = catalog.read().leaderboard.clone();

    rsx! {
        div { class: "page-header",
            h2 { class: "page-title", "Leaderboard" }
        }

        div { class: "leaderboard",
            div { class: "leaderboard-row leaderboard-heading",
                span { class: "rank", "Rank" }
                span { class: "user", "User" }
                span { class: "score", "Rating" }
                span { class: "solved", "Solved" }
            }
            for entry in entries {
                div { key: "{entry.rank}", class: "leaderboard-row",
                    span { class: "rank", "#{entry.rank}" }
                    span { class: "user", "{entry.user}" }
                    span { class: "score", "{entry.score}" }
                    span { class: "solved", "{entry.solved}" }
                }
            }
        }
    }
}
