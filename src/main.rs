#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use day_planner::app::DayPlannerApp;
use day_planner::io::settings_file::config_paths;
use day_planner::logging::init_logging;
use day_planner::settings_store::SettingsStore;

fn main() -> eframe::Result<()> {
    let paths = config_paths();
    let settings = SettingsStore::load(paths.settings.clone());

    let level = settings.get().log_level;
    let _logger = match init_logging(&level, &paths.log_dir) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };
    log::info!(
        "event=settings_path module=core path={}",
        paths.settings.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([320.0, 400.0])
            .with_title("Day Planner"),
        ..Default::default()
    };

    eframe::run_native(
        "Day Planner",
        options,
        Box::new(|cc| Ok(Box::new(DayPlannerApp::new(cc, settings)))),
    )
}
