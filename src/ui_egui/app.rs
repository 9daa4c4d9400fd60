mod lifecycle;
mod panels;
pub mod state;

use self::state::ConverterState;
use crate::models::settings::Settings;
use crate::services::conversion::DateConverter;
use crate::ui_egui::theme::ConverterTheme;

pub struct ConverterApp {
    /// Loaded configuration; read-only while the window is open
    settings: Settings,
    /// Selector values, active tab and results
    state: ConverterState,
    converter: Box<dyn DateConverter>,
    /// Currently applied theme colors
    active_theme: ConverterTheme,
    /// Shown in the status line when the config file could not be used
    config_warning: Option<String>,
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_tab_bar(ctx);
        self.render_status_bar(ctx);
        self.render_active_panel(ctx);
    }
}

impl ConverterApp {
    pub fn state(&self) -> &ConverterState {
        &self.state
    }
}
