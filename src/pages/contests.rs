//! Contests page.

use dioxus::prelude::*;

use crate::components::ContestCard;
use crate::context::use_catalog;

#[component]
pub fn Contests() -> Element {
    let catalog = use_catalog();
    let contests = catalog.read().contests.clone();

    rsx! {
        div { class: "page-header",
            h2 { class: "page-title", "Contests" }
            p { class: "page-subtitle", "Compete live or register for upcoming rounds" }
        }

        if contests.is_empty() {
            p { class: "empty-state", "No contests scheduled" }
        }

        div { class: "contests-grid",
            for contest in contests {
                ContestCard { key: "{contest.title}", contest }
            }
        }
    }
}
