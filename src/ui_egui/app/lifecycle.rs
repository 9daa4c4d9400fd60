use super::state::{ConverterState, Tab};
use super::ConverterApp;
use crate::models::calendar::MonthNameStyle;
use crate::models::settings::Settings;
use crate::services::conversion::{DateConverter, IcuConverter};
use crate::ui_egui::theme::ConverterTheme;
use crate::utils::date::today;
use anyhow::{Context, Result};
use std::path::Path;

const PERSIAN_FONT_NAME: &str = "persian";

impl ConverterApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        config_warning: Option<String>,
    ) -> Self {
        let mut settings = settings;
        let mut config_warning = config_warning;

        if let Some(font_path) = settings.persian_font.clone() {
            if let Err(e) = install_persian_font(&cc.egui_ctx, &font_path) {
                log::warn!("{:#}, falling back to Latin month names", e);
                settings.jalali_month_names = MonthNameStyle::Latin;
                config_warning.get_or_insert_with(|| format!("{:#}", e));
            }
        }

        let app = Self::with_converter(settings, Box::new(IcuConverter::new()), config_warning);
        app.active_theme.apply_to_context(&cc.egui_ctx);
        app
    }

    /// Build the app state without a window; the selectors start at today.
    pub fn with_converter(
        settings: Settings,
        converter: Box<dyn DateConverter>,
        config_warning: Option<String>,
    ) -> Self {
        let mut state = ConverterState::new(
            Tab::from_setting(&settings.default_tab),
            settings.jalali_month_names,
        );
        state.initialize(today(), converter.as_ref());

        log::info!(
            "Converter ready: today is {} / {}",
            state.gregorian.as_gregorian(),
            state.jalali.as_jalali()
        );

        let active_theme = ConverterTheme::from_setting(&settings.theme);

        Self {
            settings,
            state,
            converter,
            active_theme,
            config_warning,
        }
    }
}

/// Load a font file and put it behind the default proportional font, so
/// Latin text keeps its look and Arabic-script glyphs come from the file.
/// egui does not shape or reorder them, so Persian words render as separate
/// letters left to right.
fn install_persian_font(ctx: &egui::Context, path: &Path) -> Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read Persian font {}", path.display()))?;

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        PERSIAN_FONT_NAME.to_owned(),
        egui::FontData::from_owned(bytes),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(PERSIAN_FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);

    log::info!("Loaded Persian font from {}", path.display());
    Ok(())
}
