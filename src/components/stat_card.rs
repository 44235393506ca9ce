//! Stat Card Component
//!
//! The number counts up from zero the first time at least half of the card
//! is on screen.

use codearena_core::effects::{CountUp, COUNT_UP_INTERVAL, STAT_VISIBILITY_THRESHOLD};
use codearena_core::StatEntry;
use dioxus::prelude::*;

/// Observes the card once and sends `true` when it becomes visible.
fn visibility_script(element_id: &str) -> String {
    format!(
        r#"
        const card = document.getElementById("{element_id}");
        if (card) {{
            const observer = new IntersectionObserver((entries) => {{
                if (entries.some(entry => entry.isIntersecting)) {{
                    observer.disconnect();
                    dioxus.send(true);
                }}
            }}, {{ threshold: {STAT_VISIBILITY_THRESHOLD} }});
            observer.observe(card);
        }}
        "#
    )
}

#[component]
pub fn StatCard(stat: StatEntry, index: usize) -> Element {
    let element_id = format!("stat-card-{index}");
    let mut number = use_signal(|| stat.value.clone());

    let value = stat.value.clone();
    let script = visibility_script(&element_id);
    use_effect(move || {
        let value = value.clone();
        let script = script.clone();
        spawn(async move {
            let mut counter = match CountUp::parse(&value) {
                Ok(counter) => counter,
                Err(e) => {
                    tracing::debug!("Stat not animated: {}", e);
                    return;
                }
            };

            let mut observer = document::eval(&script);
            if observer.recv::<bool>().await.is_err() {
                return;
            }

            while let Some(frame) = counter.tick() {
                tokio::time::sleep(COUNT_UP_INTERVAL).await;
                number.set(frame);
            }
        });
    });

    rsx! {
        div { id: "{element_id}", class: "stat-card",
            div { class: "stat-number", "{number}" }
            div { class: "stat-label", "{stat.label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_script_targets_card() {
        let script = visibility_script("stat-card-3");
        assert!(script.contains(r#"getElementById("stat-card-3")"#));
        assert!(script.contains("threshold: 0.5"));
    }
}
