//! Tab navigation between the top-level pages.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Top-level page reachable from the navigation bar
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Page {
    #[default]
    Problems,
    Contests,
    Leaderboard,
    Dashboard,
}

impl Page {
    /// Navigation order
    pub const ALL: [Page; 4] = [
        Page::Problems,
        Page::Contests,
        Page::Leaderboard,
        Page::Dashboard,
    ];

    /// Value of the link's `data-page` attribute
    pub fn data_page(&self) -> &'static str {
        match self {
            Page::Problems => "problems",
            Page::Contests => "contests",
            Page::Leaderboard => "leaderboard",
            Page::Dashboard => "dashboard",
        }
    }

    /// Element id of the page section (`<data-page>-page`)
    pub fn dom_id(&self) -> String {
        format!("{}-page", self.data_page())
    }

    /// Get the display name for this page
    pub fn label(&self) -> &'static str {
        match self {
            Page::Problems => "Problems",
            Page::Contests => "Contests",
            Page::Leaderboard => "Leaderboard",
            Page::Dashboard => "Dashboard",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.data_page())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Page::ALL
            .into_iter()
            .find(|page| page.data_page() == s)
            .ok_or_else(|| Error::UnknownPage(s.to_string()))
    }
}

/// Which link and page are active. Exactly one of each at any time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Navigation {
    active: Page,
}

impl Navigation {
    pub fn new(initial: Page) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Page {
        self.active
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active == page
    }

    /// Switch to `page`, deactivating the previous one.
    pub fn select(&mut self, page: Page) {
        if self.active != page {
            tracing::debug!(from = %self.active, to = %page, "Switching page");
        }
        self.active = page;
    }

    /// CSS class for a navigation link
    pub fn link_class(&self, page: Page) -> &'static str {
        if self.is_active(page) {
            "nav-link active"
        } else {
            "nav-link"
        }
    }

    /// CSS class for a page section
    pub fn page_class(&self, page: Page) -> &'static str {
        if self.is_active(page) {
            "page active"
        } else {
            "page"
        }
    }
}
