//! Contest Card Component
//!
//! Live contests pulse (see `.contest-card.live` in the stylesheet).

use codearena_core::{Contest, ContestStatus};
use codearena_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn ContestCard(contest: Contest) -> Element {
    let class = match contest.status {
        ContestStatus::Live => "contest-card live",
        _ => "contest-card",
    };
    let variant = match contest.status {
        ContestStatus::Ended => ButtonVariant::Secondary,
        _ => ButtonVariant::Primary,
    };
    let title = contest.title.clone();
    let status = contest.status;

    rsx! {
        div { class: "{class}",
            div { class: "contest-header",
                h3 { class: "contest-title", "{contest.title}" }
                span { class: "contest-status {status.label().to_lowercase()}", "{status.label()}" }
            }
            ul { class: "contest-meta",
                li { "Starts: {contest.starts}" }
                li { "Duration: {contest.duration}" }
                li { "{contest.participants} participants" }
            }
            Button {
                label: status.action().to_string(),
                variant: variant,
                onclick: move |_| tracing::info!(contest = %title, action = status.action(), "Contest action"),
            }
        }
    }
}
