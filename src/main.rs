mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;
mod view;

use app::FunctionalGroupFinderApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = config::load_config();
    log::info!(
        "Starting with {} reference tables in {}",
        config.initial_type,
        config.data_dir.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 850.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Functional Group Finder",
        options,
        Box::new(|_cc| Ok(Box::new(FunctionalGroupFinderApp::new(config)))),
    )
}
