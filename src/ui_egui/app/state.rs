use crate::models::calendar::{CalendarKind, GregorianDate, MonthNameStyle};
use crate::services::conversion::DateConverter;
use crate::ui_egui::selector::DateSelectorState;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    JalaliToGregorian,
    GregorianToJalali,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::JalaliToGregorian, Tab::GregorianToJalali];

    pub fn label(self) -> &'static str {
        match self {
            Tab::JalaliToGregorian => "Jalali → Gregorian",
            Tab::GregorianToJalali => "Gregorian → Jalali",
        }
    }

    /// Parse the `default_tab` setting; unknown values open the first tab
    pub fn from_setting(value: &str) -> Self {
        match value {
            "gregorian_to_jalali" => Tab::GregorianToJalali,
            _ => Tab::JalaliToGregorian,
        }
    }
}

/// Outcome of the last conversion shown in a result box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    Empty,
    Converted(String),
    Failed(String),
}

impl ConversionResult {
    pub fn text(&self) -> &str {
        match self {
            ConversionResult::Empty => "",
            ConversionResult::Converted(text) | ConversionResult::Failed(text) => text,
        }
    }
}

/// Everything the converter window shows, independent of egui.
pub struct ConverterState {
    pub active_tab: Tab,
    pub jalali: DateSelectorState,
    pub gregorian: DateSelectorState,
    /// Shown under the "Jalali → Gregorian" panel
    pub gregorian_result: ConversionResult,
    /// Shown under the "Gregorian → Jalali" panel
    pub jalali_result: ConversionResult,
    pub month_names: MonthNameStyle,
}

impl ConverterState {
    pub fn new(active_tab: Tab, month_names: MonthNameStyle) -> Self {
        Self {
            active_tab,
            jalali: DateSelectorState::new(CalendarKind::Jalali, 1300, 1, 1),
            gregorian: DateSelectorState::new(CalendarKind::Gregorian, 1900, 1, 1),
            gregorian_result: ConversionResult::Empty,
            jalali_result: ConversionResult::Empty,
            month_names,
        }
    }

    /// Point both selectors at `today` and fill both results.
    pub fn initialize(&mut self, today: NaiveDate, converter: &dyn DateConverter) {
        let today = GregorianDate::from(today);
        self.gregorian.select(today.year, today.month, today.day);

        match converter.gregorian_to_solar(today) {
            Ok(jalali) => self.jalali.select(jalali.year, jalali.month, jalali.day),
            Err(e) => log::error!("Failed to convert today's date {}: {}", today, e),
        }

        self.convert_to_gregorian(converter);
        self.convert_to_jalali(converter);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn convert_to_gregorian(&mut self, converter: &dyn DateConverter) {
        let input = self.jalali.as_jalali();
        self.gregorian_result = match converter.solar_to_gregorian(input) {
            Ok(date) => {
                log::debug!("Converted Jalali {} to Gregorian {}", input, date);
                ConversionResult::Converted(date.display_long())
            }
            Err(e) => {
                log::warn!("Failed to convert Jalali {}: {}", input, e);
                ConversionResult::Failed(format!("Conversion failed: {}", e))
            }
        };
    }

    pub fn convert_to_jalali(&mut self, converter: &dyn DateConverter) {
        let input = self.gregorian.as_gregorian();
        self.jalali_result = match converter.gregorian_to_solar(input) {
            Ok(date) => {
                log::debug!("Converted Gregorian {} to Jalali {}", input, date);
                ConversionResult::Converted(date.display_with(self.month_names))
            }
            Err(e) => {
                log::warn!("Failed to convert Gregorian {}: {}", input, e);
                ConversionResult::Failed(format!("Conversion failed: {}", e))
            }
        };
    }
}
