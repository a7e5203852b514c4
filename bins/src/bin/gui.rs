// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The Time Space desktop app
//!

use eframe::egui::ViewportBuilder;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use time_space_gui::{Config, DEFAULT_WINDOW_SIZE, TimeSpaceApp};

#[macro_use]
extern crate log;
extern crate simplelog;

/// Entry point for the native GUI desktop application
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("time_space")
        .build();

    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    // Create a new tokio runtime so that we can use `tokio::spawn` elsewhere
    // without requiring every function be `async` (waiting is not acceptable
    // for GUI rendering)
    let rt = tokio::runtime::Runtime::new()?;

    // Enter the runtime so that `tokio::spawn` is available immediately.
    let _enter = rt.enter();

    // Move the runtime into its own thread and don't let it finish/exit.
    std::thread::spawn(move || {
        rt.block_on(async {
            loop {
                tokio::time::sleep(std::time::Duration::MAX).await;
            }
        })
    });

    let config = Config::load()?;
    let app = TimeSpaceApp::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([DEFAULT_WINDOW_SIZE.width, DEFAULT_WINDOW_SIZE.height]),
        ..Default::default()
    };

    info!("Launching application");

    eframe::run_native("Time Space", options, Box::new(move |_cc| Ok(Box::new(app))))?;
    Ok(())
}
