//! Temporary "Loading..." relabel for action buttons.

use std::time::Duration;

/// Words in a button label that trigger the loading state
pub const LOADING_TRIGGERS: [&str; 3] = ["Solve", "Join", "Register"];

/// Label shown while loading
pub const LOADING_LABEL: &str = "Loading...";

/// How long the button stays disabled
pub const LOADING_DURATION: Duration = Duration::from_millis(1500);

/// Whether a button with this label shows the loading state when pressed.
/// Matching is case-sensitive.
pub fn triggers_loading(label: &str) -> bool {
    LOADING_TRIGGERS.iter().any(|word| label.contains(word))
}

/// Label and disabled state of a button that may relabel itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingButton {
    original: String,
    loading: bool,
}

impl LoadingButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            original: label.into(),
            loading: false,
        }
    }

    /// Handle a click. Returns `true` when the loading state started and the
    /// caller should schedule [`LoadingButton::finish`] after
    /// [`LOADING_DURATION`].
    pub fn press(&mut self) -> bool {
        if self.loading || !triggers_loading(&self.original) {
            return false;
        }
        self.loading = true;
        true
    }

    /// Restore the original label and re-enable the button.
    pub fn finish(&mut self) {
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Disabled while loading
    pub fn is_disabled(&self) -> bool {
        self.loading
    }

    pub fn label(&self) -> &str {
        if self.loading {
            LOADING_LABEL
        } else {
            &self.original
        }
    }
}
