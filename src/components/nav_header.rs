//! Navigation Header Component
//!
//! Logo with typed subtitle on the left, one tab per page on the right.

use codearena_core::Page;
use dioxus::prelude::*;

use crate::components::TypingSubtitle;
use crate::context::{use_catalog, use_navigation};

/// Navigation Header component
///
/// Clicking a tab activates it and shows the page whose id is
/// `<data-page>-page`.
#[component]
pub fn NavHeader() -> Element {
    let catalog = use_catalog();
    let mut navigation = use_navigation();

    let subtitle = catalog.read().subtitle.clone();
    let nav = navigation();

    rsx! {
        header { class: "nav-header",
            div { class: "logo",
                h1 { class: "logo-title", "CodeArena" }
                TypingSubtitle { text: subtitle }
            }

            nav { class: "nav-links",
                for page in Page::ALL {
                    a {
                        key: "{page}",
                        class: nav.link_class(page),
                        "data-page": page.data_page(),
                        onclick: move |_| navigation.write().select(page),
                        "{page.label()}"
                    }
                }
            }
        }
    }
}
