// Persian Date Converter
// Main entry point

use persian_date_converter::models::settings::Settings;
use persian_date_converter::services::settings::SettingsService;
use persian_date_converter::ui_egui::ConverterApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Persian Date Converter");

    let (settings, config_warning) = load_settings_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Persian Date Converter")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([Settings::MIN_WINDOW_WIDTH, Settings::MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Persian Date Converter",
        native_options,
        Box::new(move |cc| Ok(Box::new(ConverterApp::new(cc, settings, config_warning)))),
    )
}

fn load_settings_or_default() -> (Settings, Option<String>) {
    let service = SettingsService::from_default_location();

    if !service.exists() {
        let settings = Settings::default();
        match service.save(&settings) {
            Ok(()) => log::info!("Wrote default config to {}", service.path().display()),
            Err(e) => log::warn!("Failed to write default config: {:#}", e),
        }
        return (settings, None);
    }

    match service.get() {
        Ok(settings) => {
            log::info!("Loaded config from {}", service.path().display());
            (settings, None)
        }
        Err(e) => {
            log::warn!("Failed to load config: {:#}, using defaults", e);
            (Settings::default(), Some(format!("Config ignored: {:#}", e)))
        }
    }
}
