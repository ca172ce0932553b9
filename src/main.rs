mod app;
mod color;
mod data;
mod fit;
mod state;
mod ui;

use anyhow::{anyhow, Context, Result};
use app::ReactionTimeApp;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let dataset = data::assemble::reaction_time_dataset();
    log::info!("Assembled {} observations", dataset.len());

    let state = AppState::build(dataset)
        .inspect_err(|e| log::error!("Failed to fit segments: {e:#}"))
        .context("preparing reaction-time plot")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui::plot::TITLE)
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        ui::plot::TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(ReactionTimeApp::new(state)))),
    )
    .map_err(|e| anyhow!("plot window failed: {e}"))
}
