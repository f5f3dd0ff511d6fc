mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::LaunchDashApp;
use eframe::egui;

/// Dataset loaded when no path is given on the command line.
const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

fn main() -> eframe::Result {
    env_logger::init();

    // Dataset path: first CLI argument, else the default file when present.
    let dataset_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| {
            let default = PathBuf::from(DEFAULT_DATASET);
            default.exists().then_some(default)
        });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(dataset_path)))),
    )
}
