//! Problem Card Component

use codearena_core::Card;
use codearena_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

const SHOWN_STYLE: &str = "display: block; animation: fadeIn 0.3s ease;";
const HIDDEN_STYLE: &str = "display: none;";

/// A problem card. Hidden cards stay mounted with `display: none`.
#[component]
pub fn ProblemCard(card: Card, visible: bool) -> Element {
    let acceptance = card.acceptance.map(|a| format!("Acceptance {a:.1}%"));
    let title = card.title.clone();

    rsx! {
        div {
            class: "problem-card",
            style: if visible { SHOWN_STYLE } else { HIDDEN_STYLE },

            div { class: "problem-header",
                h3 { class: "problem-title", "{card.title}" }
                span { class: card.difficulty_class(), "{card.difficulty}" }
            }

            p { class: "problem-description", "{card.description}" }

            if !card.tags.is_empty() {
                div { class: "problem-tags",
                    for tag in card.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
            }

            div { class: "problem-footer",
                if let Some(acceptance) = acceptance {
                    span { class: "acceptance", "{acceptance}" }
                }
                Button {
                    label: "Solve Challenge".to_string(),
                    variant: ButtonVariant::Primary,
                    onclick: move |_| tracing::info!(problem = %title, "Solve requested"),
                }
            }
        }
    }
}
