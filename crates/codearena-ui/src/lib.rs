//! CodeArena UI Components
//!
//! Dioxus widgets shared by the CodeArena pages.
//!
//! ## Design Notes
//!
//! - **Buttons** spawn a click ripple and, for action labels such as
//!   "Solve" or "Register", briefly relabel to "Loading..."
//! - **Inputs** report raw values upward; filtering happens in
//!   `codearena_core::ViewFilter`

pub mod components;

pub use components::*;
