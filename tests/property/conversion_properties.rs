// Property-based tests for the day-count rules and the converter
// Checks invariants over the full selectable year ranges

use chrono::NaiveDate;
use persian_date_converter::models::calendar::{CalendarKind, GregorianDate};
use persian_date_converter::services::conversion::{IcuConverter, DateConverter};
use persian_date_converter::ui_egui::selector::DateSelectorState;
use persian_date_converter::utils::date::{
    days_in_gregorian_month, days_in_jalali_month, is_jalali_leap_year, update_day_selection,
};
use proptest::prelude::*;

proptest! {
    /// Property: every valid Gregorian date in 1900-2100 survives a round trip
    #[test]
    fn prop_gregorian_round_trip(
        year in 1900..=2100i32,
        month in 1..=12u32,
        day in 1..=31u32,
    ) {
        prop_assume!(NaiveDate::from_ymd_opt(year, month, day).is_some());

        let converter = IcuConverter::new();
        let original = GregorianDate::new(year, month, day);
        let jalali = converter.gregorian_to_solar(original).unwrap();
        prop_assert_eq!(converter.solar_to_gregorian(jalali).unwrap(), original);
    }

    /// Property: Gregorian month lengths agree with chrono
    #[test]
    fn prop_gregorian_days_match_chrono(year in 1900..=2100i32, month in 1..=12u32) {
        let days = days_in_gregorian_month(year, month);
        prop_assert!(NaiveDate::from_ymd_opt(year, month, days).is_some());
        prop_assert!(NaiveDate::from_ymd_opt(year, month, days + 1).is_none());
    }

    /// Property: Jalali month lengths follow the 31/30/Esfand pattern
    #[test]
    fn prop_jalali_days_pattern(year in 1300..=1500i32, month in 1..=12u32) {
        let days = days_in_jalali_month(year, month);
        let expected = match month {
            1..=6 => 31,
            7..=11 => 30,
            _ if is_jalali_leap_year(year) => 30,
            _ => 29,
        };
        prop_assert_eq!(days, expected);
    }

    /// Property: the selection is kept exactly when it fits and never clamped
    #[test]
    fn prop_update_day_selection(previous in 1..=31u32, max_days in 28..=31u32) {
        match update_day_selection(previous, max_days) {
            Some(day) => {
                prop_assert_eq!(day, previous);
                prop_assert!(day <= max_days);
            }
            None => prop_assert!(previous > max_days),
        }
    }

    /// Property: after any sequence of year/month changes the selected day fits the month
    #[test]
    fn prop_selector_day_always_fits(
        start_day in 1..=31u32,
        changes in proptest::collection::vec((1300..=1500i32, 1..=12u32), 1..10),
    ) {
        let mut selector = DateSelectorState::new(CalendarKind::Jalali, 1403, 1, start_day);
        for (year, month) in changes {
            selector.set_year(year);
            selector.set_month(month);
            prop_assert!(selector.effective_day() <= selector.day_count());
            if let Some(day) = selector.day() {
                prop_assert!(day <= selector.day_count());
            }
        }
    }

    /// Property: selecting a full date never leaves a day the list does not offer
    #[test]
    fn prop_selector_select_keeps_day_within_list(
        year in 1300..=1500i32,
        month in 1..=12u32,
        day in 1..=31u32,
    ) {
        let mut selector = DateSelectorState::new(CalendarKind::Jalali, 1300, 1, 1);
        selector.select(year, month, day);
        prop_assert!(selector.effective_day() <= selector.day_count());
        prop_assert_eq!(selector.day(), update_day_selection(day, selector.day_count()));
    }
}
