//! Year/month/day selector state for one calendar.
//!
//! Each tab panel owns one of these. Changing the year or month rebuilds the
//! day list for the calendar's month length and keeps the previous day only
//! if it still exists.

use crate::models::calendar::{CalendarKind, GregorianDate, JalaliDate};
use crate::utils::date::{days_in_month, update_day_selection};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSelectorState {
    kind: CalendarKind,
    year: i32,
    month: u32,
    /// `None` after a month change dropped the previous day
    day: Option<u32>,
    day_count: u32,
}

impl DateSelectorState {
    pub fn new(kind: CalendarKind, year: i32, month: u32, day: u32) -> Self {
        let day_count = days_in_month(kind, year, month);
        Self {
            kind,
            year,
            month,
            day: update_day_selection(day, day_count),
            day_count,
        }
    }

    pub fn kind(&self) -> CalendarKind {
        self.kind
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The explicitly selected day, if one survived the last month change
    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// The day shown in the day list and used for conversion.
    ///
    /// With no selection the list shows its first entry.
    pub fn effective_day(&self) -> u32 {
        self.day.unwrap_or(1)
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
        self.refresh_days();
    }

    pub fn set_month(&mut self, month: u32) {
        self.month = month;
        self.refresh_days();
    }

    pub fn set_day(&mut self, day: u32) {
        self.day = Some(day);
    }

    /// Select a full date: year and month first so the day list matches,
    /// then the day, which is left unset if the list does not offer it.
    pub fn select(&mut self, year: i32, month: u32, day: u32) {
        self.year = year;
        self.month = month;
        self.refresh_days();
        self.day = update_day_selection(day, self.day_count);
    }

    pub fn year_options(&self) -> RangeInclusive<i32> {
        self.kind.year_range()
    }

    pub fn month_options(&self) -> RangeInclusive<u32> {
        1..=12
    }

    pub fn day_options(&self) -> RangeInclusive<u32> {
        1..=self.day_count
    }

    pub fn as_jalali(&self) -> JalaliDate {
        JalaliDate::new(self.year, self.month, self.effective_day())
    }

    pub fn as_gregorian(&self) -> GregorianDate {
        GregorianDate::new(self.year, self.month, self.effective_day())
    }

    fn refresh_days(&mut self) {
        let previous = self.day;
        self.day_count = days_in_month(self.kind, self.year, self.month);
        self.day = previous.and_then(|day| update_day_selection(day, self.day_count));
        log::trace!(
            "{} selector {}/{}: {} days, day {:?} -> {:?}",
            self.kind.label(),
            self.year,
            self.month,
            self.day_count,
            previous,
            self.day
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_day_count() {
        let selector = DateSelectorState::new(CalendarKind::Jalali, 1403, 7, 15);
        assert_eq!(selector.day_count(), 30);
        assert_eq!(selector.day(), Some(15));
        assert_eq!(selector.day_options(), 1..=30);
    }

    #[test]
    fn test_month_change_keeps_day_that_fits() {
        let mut selector = DateSelectorState::new(CalendarKind::Gregorian, 2024, 1, 28);
        selector.set_month(2);
        assert_eq!(selector.day_count(), 29);
        assert_eq!(selector.day(), Some(28));
    }

    #[test]
    fn test_month_change_drops_day_without_clamping() {
        let mut selector = DateSelectorState::new(CalendarKind::Gregorian, 2024, 1, 31);
        selector.set_month(4);
        assert_eq!(selector.day_count(), 30);
        assert_eq!(selector.day(), None);
        assert_ne!(selector.effective_day(), 30);
        assert_eq!(selector.effective_day(), 1);
    }

    #[test]
    fn test_year_change_recomputes_esfand() {
        let mut selector = DateSelectorState::new(CalendarKind::Jalali, 1404, 12, 30);
        assert_eq!(selector.day(), Some(30));

        selector.set_year(1403);
        assert_eq!(selector.day_count(), 29);
        assert_eq!(selector.day(), None);
    }

    #[test]
    fn test_dropped_day_stays_unset_when_month_grows_again() {
        let mut selector = DateSelectorState::new(CalendarKind::Gregorian, 2023, 3, 31);
        selector.set_month(2);
        selector.set_month(3);
        assert_eq!(selector.day(), None);
    }

    #[test]
    fn test_day_change_does_not_recompute() {
        let mut selector = DateSelectorState::new(CalendarKind::Jalali, 1403, 1, 1);
        selector.set_day(31);
        assert_eq!(selector.day_count(), 31);
        assert_eq!(selector.as_jalali(), JalaliDate::new(1403, 1, 31));
    }

    #[test]
    fn test_select_sets_full_date() {
        let mut selector = DateSelectorState::new(CalendarKind::Gregorian, 1900, 1, 1);
        selector.select(2024, 2, 29);
        assert_eq!(selector.as_gregorian(), GregorianDate::new(2024, 2, 29));
        assert_eq!(selector.day_count(), 29);
        assert_eq!(selector.year_options(), 1900..=2100);
    }

    #[test]
    fn test_select_day_missing_from_list_is_left_unset() {
        // 30 Esfand 1403 exists, but the selector rule gives Esfand 1403 29 days
        let mut selector = DateSelectorState::new(CalendarKind::Jalali, 1300, 1, 1);
        selector.select(1403, 12, 30);
        assert_eq!(selector.day_count(), 29);
        assert_eq!(selector.day(), None);
        assert_eq!(selector.effective_day(), 1);
    }
}
