//! Problems page - searchable, filterable problem cards.

use codearena_core::{Card, ViewFilter};
use codearena_ui::{difficulty_options, FilterSelect, SearchInput};
use dioxus::prelude::*;

use crate::components::ProblemCard;
use crate::context::{get_launch_config, use_catalog};

/// Problems page component.
///
/// Holds the [`ViewFilter`] for the catalog's problems. Each input event
/// goes straight to the matching filter handler.
#[component]
pub fn Problems() -> Element {
    let catalog = use_catalog();
    let mut filter = use_signal(|| {
        ViewFilter::with_mode(
            catalog.read().problems.clone(),
            get_launch_config().filter_mode,
        )
    });

    let (query, difficulty, cards, shown) = {
        let view = filter.read();
        let cards: Vec<(Card, bool)> = view
            .cards()
            .iter()
            .cloned()
            .zip(view.visibility().iter().copied())
            .collect();
        (
            view.state().query.clone(),
            view.state().difficulty.clone(),
            cards,
            view.visible_count(),
        )
    };
    let total = cards.len();

    rsx! {
        div { class: "page-header",
            h2 { class: "page-title", "Problems" }
            p { class: "page-subtitle", "Showing {shown} of {total} problems" }
        }

        div { class: "problem-controls",
            SearchInput {
                value: query,
                oninput: move |q: String| filter.write().on_query_change(&q),
            }
            FilterSelect {
                options: difficulty_options(),
                selected: difficulty,
                onchange: move |d: String| filter.write().on_difficulty_change(&d),
            }
        }

        div { class: "problems-grid",
            for (index, (card, visible)) in cards.into_iter().enumerate() {
                ProblemCard { key: "{index}", card, visible }
            }
        }
    }
}
