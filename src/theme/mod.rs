//! Visual theme for CodeArena.

mod styles;

pub use styles::GLOBAL_STYLES;
