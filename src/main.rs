#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use codearena_core::{Catalog, FilterMode, Page};
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::LaunchConfig;

/// Global launch settings, set from command line
static LAUNCH: OnceLock<LaunchConfig> = OnceLock::new();

/// Get the launch settings (set from command line or default)
pub fn get_launch_config() -> LaunchConfig {
    LAUNCH.get().cloned().unwrap_or_default()
}

/// CodeArena - problem and contest browser
#[derive(Parser, Debug)]
#[command(name = "codearena-desktop")]
#[command(about = "CodeArena - browse practice problems and contests")]
struct Args {
    /// JSON catalog replacing the built-in problems, contests and stats
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Page to open first (problems, contests, leaderboard, dashboard)
    #[arg(short, long, default_value = "problems")]
    page: String,

    /// Require search and difficulty filters to match together
    #[arg(long)]
    combined_filters: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = codearena_core::logging::DEFAULT_DIRECTIVE)]
    log: String,
}

/// Turn arguments into launch settings. Bad input is logged and replaced
/// with the defaults.
fn resolve_launch_config(args: &Args) -> LaunchConfig {
    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path).unwrap_or_else(|e| {
            tracing::error!("Failed to load catalog {:?}: {}", path, e);
            Catalog::builtin()
        }),
        None => Catalog::builtin(),
    };

    let initial_page = args.page.parse::<Page>().unwrap_or_else(|e| {
        tracing::error!("{}, opening {}", e, Page::default());
        Page::default()
    });

    let filter_mode = if args.combined_filters {
        FilterMode::Combined
    } else {
        FilterMode::Independent
    };

    LaunchConfig {
        catalog,
        initial_page,
        filter_mode,
    }
}

fn main() {
    let args = Args::parse();
    codearena_core::logging::init(&args.log);

    let launch = resolve_launch_config(&args);
    tracing::info!(
        page = %launch.initial_page,
        problems = launch.catalog.problems.len(),
        mode = ?launch.filter_mode,
        "Starting CodeArena"
    );
    let _ = LAUNCH.set(launch);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("CodeArena")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_builtin_catalog() {
        let args = Args::try_parse_from(["codearena-desktop"]).unwrap();
        let launch = resolve_launch_config(&args);
        assert_eq!(launch.initial_page, Page::Problems);
        assert_eq!(launch.filter_mode, FilterMode::Independent);
        assert_eq!(launch.catalog, Catalog::builtin());
    }

    #[test]
    fn flags_select_page_and_mode() {
        let args = Args::try_parse_from([
            "codearena-desktop",
            "--page",
            "contests",
            "--combined-filters",
        ])
        .unwrap();
        let launch = resolve_launch_config(&args);
        assert_eq!(launch.initial_page, Page::Contests);
        assert_eq!(launch.filter_mode, FilterMode::Combined);
    }

    #[test]
    fn bad_inputs_fall_back_to_defaults() {
        let args = Args::try_parse_from([
            "codearena-desktop",
            "--page",
            "settings",
            "--catalog",
            "/nonexistent/catalog.json",
        ])
        .unwrap();
        let launch = resolve_launch_config(&args);
        assert_eq!(launch.initial_page, Page::Problems);
        assert_eq!(launch.catalog, Catalog::builtin());
    }
}
