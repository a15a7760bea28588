// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Futbol AI Asistan
//!
//! A desktop application for football content creators: a canvas
//! graphic editor for social media graphics, an AI chat assistant and
//! live league standings.

mod app;
mod models;
mod net;
mod render;
mod ui;
mod util;

use app::FutbolApp;
use anyhow::Result;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Futbol AI Asistan"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Futbol AI Asistan",
        options,
        Box::new(|_cc| Ok(Box::new(FutbolApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
