//! Dashboard page - personal stats and recent activity.

use dioxus::prelude::*;

use crate::components::StatCard;
use crate::context::use_catalog;

#[component]
pub fn Dashboard() -> Element {
    let catalog = use_catalog();
    let (stats, activity) = {
        let catalog = catalog.read();
        (catalog.stats.clone(), catalog.activity.clone())
    };

    rsx! {
        div { class: "page-header",
            h2 { class: "page-title", "Dashboard" }
        }

        div { class: "stats-grid",
            for (index, stat) in stats.into_iter().enumerate() {
                StatCard { key: "{index}", stat, index }
            }
        }

        section { class: "activity",
            h3 { class: "section-title", "Recent Activity" }
            for (index, item) in activity.into_iter().enumerate() {
                div { key: "{index}", class: "activity-item",
                    span { class: "activity-text", "{item.text}" }
                    span { class: "activity-time", "{item.when}" }
                }
            }
        }
    }
}
