//! Button Component
//!
//! Every button gets a click ripple. Buttons whose label names an action
//! ("Solve", "Join", "Register") show "Loading..." and stay disabled for a
//! moment after a click.

use dioxus::prelude::*;

use codearena_core::effects::{LoadingButton, Ripple, LOADING_DURATION, RIPPLE_LIFETIME};

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main call to action
    #[default]
    Primary,
    /// Secondary action on a card
    Secondary,
    /// Borderless, low emphasis
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Button text; also decides whether the loading relabel applies
    pub label: String,
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button with ripple and loading effects
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         label: "Solve Challenge".to_string(),
///         onclick: move |_| tracing::info!("solve clicked"),
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let label = props.label.clone();
    let mut state = use_signal(move || LoadingButton::new(label));
    let mut mounted: Signal<Option<std::rc::Rc<MountedData>>> = use_signal(|| None);
    let mut ripples: Signal<Vec<(u64, Ripple)>> = use_signal(Vec::new);
    let mut next_ripple = use_signal(|| 0u64);

    let full_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{} {}", props.variant.class(), extra),
        _ => props.variant.class().to_string(),
    };

    let onclick = move |e: MouseEvent| {
        let point = e.element_coordinates();

        // Ripple needs the button's size, which is only known asynchronously
        if let Some(element) = mounted() {
            let id = next_ripple();
            *next_ripple.write() += 1;
            spawn(async move {
                let Ok(rect) = element.get_client_rect().await else {
                    return;
                };
                let ripple = Ripple::at(rect.width(), rect.height(), point.x, point.y);
                ripples.write().push((id, ripple));
                tokio::time::sleep(RIPPLE_LIFETIME).await;
                ripples.write().retain(|(rid, _)| *rid != id);
            });
        }

        if state.write().press() {
            tracing::debug!(label = %state.read().label(), "Button loading");
            spawn(async move {
                tokio::time::sleep(LOADING_DURATION).await;
                state.write().finish();
            });
        }

        if let Some(handler) = &props.onclick {
            handler.call(());
        }
    };

    let disabled = state.read().is_disabled();
    let text = state.read().label().to_string();

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: disabled,
            onmounted: move |e| mounted.set(Some(e.data())),
            onclick: onclick,
            "{text}"
            for (id, ripple) in ripples() {
                span { key: "{id}", class: "ripple", style: "{ripple.style()}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn btn-secondary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
