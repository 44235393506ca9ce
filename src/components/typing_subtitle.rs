//! Logo subtitle revealed one character at a time.

use codearena_core::effects::{Typewriter, TYPE_CHAR_DELAY, TYPE_START_DELAY};
use dioxus::prelude::*;

#[component]
pub fn TypingSubtitle(text: String) -> Element {
    let mut shown = use_signal(String::new);

    use_effect(move || {
        let text = text.clone();
        spawn(async move {
            let mut writer = Typewriter::new(&text);
            if writer.is_done() {
                return;
            }
            tokio::time::sleep(TYPE_START_DELAY).await;
            while let Some(frame) = writer.tick() {
                shown.set(frame);
                tokio::time::sleep(TYPE_CHAR_DELAY).await;
            }
        });
    });

    rsx! {
        p { class: "logo-subtitle", "{shown}" }
    }
}
