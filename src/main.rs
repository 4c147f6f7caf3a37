// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! POI Viewer - Point Of Interest Viewer
//!
//! A desktop application for clicking points of interest on an image.
//! Every click is drawn on the image, listed in a coordinates table and
//! appended to a timestamped log file.

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;
mod viewer;

use anyhow::{Context, Result};
use app::ViewerApp;
use config::Settings;
use io::click_log::{self, ClickLog};
use viewer::Viewer;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // The log file name is fixed for the whole run
    let program_dir = config::program_dir()?;
    let settings = Settings::load_from(&program_dir)?;
    let output_dir = settings.resolve_output_dir(&program_dir);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let log_path = click_log::log_file_path(&output_dir, chrono::Local::now().naive_local(), &settings);
    log::info!("Recording clicks to {}", log_path.display());

    let viewer = Viewer::new(ClickLog::new(log_path));

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::WINDOW_SIZE)
            .with_position(app::WINDOW_POSITION)
            .with_title("Image Viewer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Image Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(viewer, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
