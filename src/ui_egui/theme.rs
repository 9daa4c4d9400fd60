//! Theme module for the converter window
//!
//! Defines the ConverterTheme structure and how a configured theme name is
//! resolved to concrete colors.

use egui::Color32;

/// Colors used by the converter window
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window and panel background
    pub app_background: Color32,

    /// Background of the result box
    pub result_background: Color32,

    /// Highlight for the active tab
    pub accent: Color32,

    /// Primary text color (headings, results)
    pub text_primary: Color32,

    /// Secondary text color (field labels, status line)
    pub text_secondary: Color32,

    /// Text color for conversion errors
    pub error_text: Color32,
}

impl ConverterTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            result_background: Color32::from_rgb(230, 240, 255),
            accent: Color32::from_rgb(100, 150, 255),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            error_text: Color32::from_rgb(190, 40, 40),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            result_background: Color32::from_rgb(50, 60, 80),
            accent: Color32::from_rgb(100, 150, 255),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            error_text: Color32::from_rgb(255, 120, 120),
        }
    }

    /// Resolve a configured theme name. "system" asks the desktop.
    pub fn from_setting(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.selection.bg_fill = self.accent;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
