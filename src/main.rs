use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use bitscope::app::BitScopeApp;
use bitscope::config::{Args, InputPaths};
use bitscope::logging::init_logging;
use bitscope::state::CapturePair;

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let paths = InputPaths::resolve(&args).context("failed to locate capture logs")?;
    let captures = CapturePair::load(&paths).context("failed to load capture logs")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("BitScope")
            .with_inner_size([1400.0, 860.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "BitScope",
        options,
        Box::new(move |cc| Ok(Box::new(BitScopeApp::new(cc, captures, paths)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
