use super::state::{ConversionResult, Tab};
use super::ConverterApp;
use crate::models::calendar::{month_name, CalendarKind};
use crate::ui_egui::selector::DateSelectorState;
use egui::{Context, RichText};

/// What the user changed in a selector this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectorChange {
    Year(i32),
    Month(u32),
    Day(u32),
}

impl ConverterApp {
    pub(super) fn render_tab_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    let selected = self.state.active_tab == tab;
                    if ui.selectable_label(selected, tab.label()).clicked() && !selected {
                        log::debug!("Switched to tab {:?}", tab);
                        self.state.select_tab(tab);
                    }
                }
            });
        });
    }

    pub(super) fn render_status_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let text = match &self.config_warning {
                Some(warning) => RichText::new(warning).color(self.active_theme.error_text),
                None => RichText::new("Jalali 1300–1500 · Gregorian 1900–2100")
                    .color(self.active_theme.text_secondary),
            };
            ui.label(text.small());
        });
    }

    pub(super) fn render_active_panel(&mut self, ctx: &Context) {
        let panel_frame = egui::Frame::central_panel(&ctx.style())
            .inner_margin(egui::Margin::same(12.0));

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| match self.state.active_tab {
                Tab::JalaliToGregorian => self.render_jalali_panel(ui),
                Tab::GregorianToJalali => self.render_gregorian_panel(ui),
            });
    }

    fn render_jalali_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Jalali date");
        ui.add_space(6.0);

        let month_names = self.settings.jalali_month_names;
        if let Some(change) = render_selector(ui, &self.state.jalali, |month| {
            month_name(CalendarKind::Jalali, month, month_names)
        }) {
            apply_change(&mut self.state.jalali, change);
        }

        ui.add_space(8.0);
        if ui.button("Convert to Gregorian").clicked() {
            self.state.convert_to_gregorian(self.converter.as_ref());
        }

        ui.add_space(8.0);
        self.render_result(ui, "Gregorian date", &self.state.gregorian_result);
    }

    fn render_gregorian_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Gregorian date");
        ui.add_space(6.0);

        if let Some(change) = render_selector(ui, &self.state.gregorian, |month| {
            month_name(CalendarKind::Gregorian, month, self.settings.jalali_month_names)
        }) {
            apply_change(&mut self.state.gregorian, change);
        }

        ui.add_space(8.0);
        if ui.button("Convert to Jalali").clicked() {
            self.state.convert_to_jalali(self.converter.as_ref());
        }

        ui.add_space(8.0);
        self.render_result(ui, "Jalali date", &self.state.jalali_result);
    }

    fn render_result(&self, ui: &mut egui::Ui, title: &str, result: &ConversionResult) {
        ui.label(RichText::new(title).color(self.active_theme.text_secondary));

        let text = match result {
            ConversionResult::Failed(message) => {
                RichText::new(message).color(self.active_theme.error_text)
            }
            other => RichText::new(other.text()).size(18.0).strong(),
        };

        egui::Frame::none()
            .fill(self.active_theme.result_background)
            .rounding(4.0)
            .inner_margin(egui::Margin::same(8.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(text);
            });
    }
}

/// Draw the year, month and day combo boxes for one selector.
///
/// Returns the change the user made, if any; the caller applies it so the
/// day list is rebuilt before the next frame.
fn render_selector<'a>(
    ui: &mut egui::Ui,
    selector: &DateSelectorState,
    month_label: impl Fn(u32) -> &'a str,
) -> Option<SelectorChange> {
    let prefix = selector.kind().label();
    let mut year = selector.year();
    let mut month = selector.month();
    let mut day = selector.effective_day();

    egui::Grid::new(format!("{prefix}_selector"))
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Year");
            egui::ComboBox::from_id_source(format!("{prefix}_year"))
                .width(90.0)
                .selected_text(year.to_string())
                .show_ui(ui, |ui| {
                    for option in selector.year_options() {
                        ui.selectable_value(&mut year, option, option.to_string());
                    }
                });
            ui.end_row();

            ui.label("Month");
            egui::ComboBox::from_id_source(format!("{prefix}_month"))
                .width(120.0)
                .selected_text(month_label(month))
                .show_ui(ui, |ui| {
                    for option in selector.month_options() {
                        ui.selectable_value(&mut month, option, month_label(option));
                    }
                });
            ui.end_row();

            ui.label("Day");
            egui::ComboBox::from_id_source(format!("{prefix}_day"))
                .width(60.0)
                .selected_text(day.to_string())
                .show_ui(ui, |ui| {
                    for option in selector.day_options() {
                        ui.selectable_value(&mut day, option, option.to_string());
                    }
                });
            ui.end_row();
        });

    if year != selector.year() {
        Some(SelectorChange::Year(year))
    } else if month != selector.month() {
        Some(SelectorChange::Month(month))
    } else if day != selector.effective_day() {
        Some(SelectorChange::Day(day))
    } else {
        None
    }
}

fn apply_change(selector: &mut DateSelectorState, change: SelectorChange) {
    match change {
        SelectorChange::Year(year) => selector.set_year(year),
        SelectorChange::Month(month) => selector.set_month(month),
        SelectorChange::Day(day) => selector.set_day(day),
    }
}
