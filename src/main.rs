#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod snapshot;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::snapshot::DashboardSnapshot;

/// Global dashboard snapshot, resolved before launch
static SNAPSHOT: OnceLock<DashboardSnapshot> = OnceLock::new();

/// Get the dashboard snapshot (loaded at startup or the built-in sample)
pub fn get_snapshot() -> DashboardSnapshot {
    SNAPSHOT.get().cloned().unwrap_or_else(DashboardSnapshot::sample)
}

/// FitForge - Fitness dashboard
#[derive(Parser, Debug)]
#[command(name = "fitforge-desktop")]
#[command(about = "FitForge - Your training at a glance")]
struct Args {
    /// Dashboard snapshot (JSON) to display
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "fitforge_ui=trace" (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn main() {
    let args = Args::parse();

    let filter = match args.log.as_deref() {
        Some(directives) => EnvFilter::try_new(directives),
        None => EnvFilter::try_from_default_env(),
    }
    .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let dashboard = snapshot::resolve(args.snapshot.as_deref());
    let _ = SNAPSHOT.set(dashboard);

    let window_width = 1100.0;
    let window_height = 800.0;

    tracing::info!("Starting FitForge desktop");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("FitForge")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
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
    fn snapshot_defaults_to_sample_before_launch() {
        assert_eq!(get_snapshot(), DashboardSnapshot::sample());
    }
}
