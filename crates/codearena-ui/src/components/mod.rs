//! Reusable UI components
//!
//! Class names match the global stylesheet of the desktop app
//! (`.btn`, `.search-input`, `.filter-select`).

mod button;
mod input;

pub use button::*;
pub use input::*;
