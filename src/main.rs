mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::LaunchDashApp;
use eframe::egui;
use state::AppState;

const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Dataset path from the first argument, else the conventional file name.
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // A dataset that cannot be loaded is fatal: do not open the window.
    let table = data::loader::load_file(&path)
        .with_context(|| format!("loading launch dataset from {}", path.display()))?;

    let bounds = table.payload_bounds();
    log::info!(
        "Loaded {} launches from {} (payload {:.0}–{:.0} kg)",
        table.len(),
        path.display(),
        bounds.min,
        bounds.max
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    let state = AppState::new(path, table);
    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
