//! Bulmaca desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Bulmaca application.

use bulmaca_app::{
    BulmacaApp,
    config::{AppConfig, Cli},
    version,
};
use clap::Parser as _;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "uk.dutl.bulmaca";

    better_panic::install();
    env_logger::init();

    let config = AppConfig::from_cli(Cli::parse());
    log::info!("{}", version::build_version());
    log::debug!("{config:?}");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((480.0, 760.0))
            .with_min_inner_size((320.0, 480.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Bulmaca",
        options,
        Box::new(move |cc| Ok(Box::new(BulmacaApp::new(cc, &config)))),
    )
}
