//! Shared state for CodeArena components.
//!
//! The App component provides the catalog and the navigation state; pages
//! read them with the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let catalog = use_catalog();
//! let mut navigation = use_navigation();
//! navigation.write().select(Page::Contests);
//! ```

use codearena_core::{Catalog, FilterMode, Navigation, Page};
use dioxus::prelude::*;

/// Settings resolved from the command line before the window opens.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchConfig {
    pub catalog: Catalog,
    pub initial_page: Page,
    pub filter_mode: FilterMode,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            catalog: Catalog::builtin(),
            initial_page: Page::default(),
            filter_mode: FilterMode::default(),
        }
    }
}

/// Get the launch settings set from command line args.
pub fn get_launch_config() -> LaunchConfig {
    crate::get_launch_config()
}

/// Hook to access the page content.
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}

/// Hook to access the active page.
pub fn use_navigation() -> Signal<Navigation> {
    use_context::<Signal<Navigation>>()
}
