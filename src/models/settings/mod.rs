// Settings module
// User-editable configuration loaded from config.toml

use crate::models::calendar::MonthNameStyle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "light", "dark" or "system"
    pub theme: String,
    /// Tab shown when the window opens: "jalali_to_gregorian" or "gregorian_to_jalali"
    pub default_tab: String,
    pub jalali_month_names: MonthNameStyle,
    /// Font with Arabic-script glyphs, needed for Persian month names
    pub persian_font: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "system".to_string(),
            default_tab: "jalali_to_gregorian".to_string(),
            jalali_month_names: MonthNameStyle::Latin,
            persian_font: None,
            window_width: 420.0,
            window_height: 320.0,
        }
    }
}

impl Settings {
    pub const MIN_WINDOW_WIDTH: f32 = 320.0;
    pub const MIN_WINDOW_HEIGHT: f32 = 220.0;

    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if !matches!(self.theme.as_str(), "light" | "dark" | "system") {
            return Err(SettingsValidationError::UnknownTheme(self.theme.clone()));
        }
        if !matches!(
            self.default_tab.as_str(),
            "jalali_to_gregorian" | "gregorian_to_jalali"
        ) {
            return Err(SettingsValidationError::UnknownTab(self.default_tab.clone()));
        }
        if !(self.window_width >= Self::MIN_WINDOW_WIDTH
            && self.window_height >= Self::MIN_WINDOW_HEIGHT)
        {
            return Err(SettingsValidationError::WindowTooSmall);
        }
        if self.jalali_month_names == MonthNameStyle::Persian && self.persian_font.is_none() {
            return Err(SettingsValidationError::MissingPersianFont);
        }

        Ok(())
    }
}

/// Validation errors for Settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsValidationError {
    UnknownTheme(String),
    UnknownTab(String),
    WindowTooSmall,
    MissingPersianFont,
}

impl std::fmt::Display for SettingsValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTheme(theme) => {
                write!(f, "Unknown theme '{}' (use light, dark or system)", theme)
            }
            Self::UnknownTab(tab) => write!(
                f,
                "Unknown default tab '{}' (use jalali_to_gregorian or gregorian_to_jalali)",
                tab
            ),
            Self::WindowTooSmall => write!(
                f,
                "Window size must be at least {}x{}",
                Settings::MIN_WINDOW_WIDTH,
                Settings::MIN_WINDOW_HEIGHT
            ),
            Self::MissingPersianFont => {
                write!(f, "Persian month names need persian_font to be set")
            }
        }
    }
}

impl std::error::Error for SettingsValidationError {}
