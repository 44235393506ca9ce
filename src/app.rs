use codearena_core::effects::background_position;
use codearena_core::{Navigation, Page};
use dioxus::prelude::*;

use crate::components::NavHeader;
use crate::context::get_launch_config;
use crate::pages::{Contests, Dashboard, Leaderboard, Problems};
use crate::theme::GLOBAL_STYLES;

/// Sends the window's vertical scroll offset on every scroll event.
const SCROLL_LISTENER: &str = r#"
    dioxus.send(window.pageYOffset);
    window.addEventListener('scroll', () => dioxus.send(window.pageYOffset));
"#;

/// Root application component.
///
/// Provides global styles, catalog and navigation context. Every page is
/// rendered; only the active one is shown.
#[component]
pub fn App() -> Element {
    let launch = get_launch_config();
    let catalog = use_signal(|| launch.catalog.clone());
    let navigation = use_signal(|| Navigation::new(launch.initial_page));
    let mut background = use_signal(|| background_position(0.0));

    use_context_provider(|| catalog);
    use_context_provider(|| navigation);

    // Parallax background follows the scroll position
    use_effect(move || {
        spawn(async move {
            let mut listener = document::eval(SCROLL_LISTENER);
            while let Ok(scroll_y) = listener.recv::<f64>().await {
                background.set(background_position(scroll_y));
            }
            tracing::debug!("Scroll listener closed");
        });
    });

    let nav = navigation();
    let background = background();

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "app",
            style: "background-position: {background}",
            NavHeader {}
            main { class: "main-content",
                for page in Page::ALL {
                    section {
                        key: "{page}",
                        id: page.dom_id(),
                        class: nav.page_class(page),
                        {
                            match page {
                                Page::Problems => rsx! { Problems {} },
                                Page::Contests => rsx! { Contests {} },
                                Page::Leaderboard => rsx! { Leaderboard {} },
                                Page::Dashboard => rsx! { Dashboard {} },
                            }
                        }
                    }
                }
            }
        }
    }
}
