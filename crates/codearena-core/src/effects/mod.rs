//! Tick-driven models behind the page's decorative effects.
//!
//! Each model is advanced by the UI layer from a spawned timer task and
//! exposes the constants that task sleeps on. None of them touch the DOM.

mod counter;
mod loading;
mod parallax;
mod ripple;
mod typewriter;

pub use counter::{CountUp, StatFormat, COUNT_UP_INTERVAL, COUNT_UP_STEPS, STAT_VISIBILITY_THRESHOLD};
pub use loading::{triggers_loading, LoadingButton, LOADING_DURATION, LOADING_LABEL, LOADING_TRIGGERS};
pub use parallax::{background_offset, background_position, PARALLAX_RATE};
pub use ripple::{Ripple, RIPPLE_LIFETIME};
pub use typewriter::{Typewriter, TYPE_CHAR_DELAY, TYPE_START_DELAY};
