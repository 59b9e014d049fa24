mod app;
mod color;
mod config;
mod state;
mod ui;

use anyhow::{Context, anyhow};
use clap::Parser;
use eframe::egui;

use app::DashboardApp;
use config::Config;
use state::AppState;
use steam_dashboard::data::loader;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("steam_dashboard=info"),
    )
    .init();

    let config = Config::parse();
    log::debug!("Starting with {config:?}");

    let mut state = AppState::new(usize::from(config.top_n));

    // A dataset named at startup must load, or we do not start at all.
    if let Some(path) = &config.data {
        let dataset = loader::load_file(path)
            .with_context(|| format!("loading dataset {}", path.display()))?;
        state.set_dataset(dataset);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Steam Top Games",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can fetch and render thumbnails.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DashboardApp::new(state)))
        }),
    )
    .map_err(|e| anyhow!("running the dashboard window: {e}"))
}
