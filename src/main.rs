mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::EhiDashboardApp;
use clap::Parser;
use config::Cli;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let cli = Cli::parse();
    let mut state = AppState::new(cli.record_limit());
    if !cli.files.is_empty() {
        ui::panels::load_paths(&mut state, &cli.files);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1320.0, 900.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hallucination & ROUGE Analysis",
        options,
        Box::new(|_cc| Ok(Box::new(EhiDashboardApp::new(state)))),
    )
}
