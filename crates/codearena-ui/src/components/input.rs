//! Search and filter inputs for the problem list.

use dioxus::prelude::*;

/// Search input with icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called on every keystroke with the raw value
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Search problems...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Single-select dropdown
#[derive(Clone, PartialEq, Props)]
pub struct FilterSelectProps {
    /// Option labels, in display order; each label is also its value
    pub options: Vec<String>,
    /// Currently selected option
    pub selected: String,
    /// Handler called with the newly selected option
    pub onchange: EventHandler<String>,
}

/// Dropdown used for the difficulty filter
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FilterSelect {
///         options: difficulty_options(),
///         selected: filter.read().state().difficulty.clone(),
///         onchange: move |d: String| filter.write().on_difficulty_change(&d),
///     }
/// }
/// ```
#[component]
pub fn FilterSelect(props: FilterSelectProps) -> Element {
    rsx! {
        select {
            class: "filter-select",
            value: "{props.selected}",
            onchange: move |e| props.onchange.call(e.value()),
            for label in props.options.iter() {
                option {
                    key: "{label}",
                    value: "{label}",
                    selected: *label == props.selected,
                    "{label}"
                }
            }
        }
    }
}

/// Difficulty selector options as owned strings
pub fn difficulty_options() -> Vec<String> {
    codearena_core::DIFFICULTY_OPTIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_options_start_with_sentinel() {
        let options = difficulty_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], codearena_core::ALL_DIFFICULTIES);
        assert!(options.contains(&"Hard".to_string()));
    }
}
