//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence; otherwise `default_directive` applies
//! (e.g. `"info"` or `"codearena_core=debug,info"`).

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Default directive used when neither `RUST_LOG` nor the caller gives one
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Build the filter from `RUST_LOG`, falling back to `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a global fmt subscriber. Calling it twice is harmless; the
/// second call leaves the first subscriber in place.
pub fn init(default_directive: &str) {
    let result = tracing_subscriber::registry()
        .with(env_filter(default_directive))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
