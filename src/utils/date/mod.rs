// Date utility functions
// Day-count rules shared by both selector flows

use crate::models::calendar::CalendarKind;
use chrono::{Local, NaiveDate};

/// Leap test used by the Jalali selector.
///
/// This is the Gregorian 4/100/400 shape applied to Jalali year numbers. The
/// converter uses the 33-year cycle instead, so the two can disagree about
/// whether Esfand has a 30th day.
pub fn is_jalali_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Jalali month: 31 for the first six months, 30 for
/// the next five, and 29 or 30 for Esfand.
pub fn days_in_jalali_month(year: i32, month: u32) -> u32 {
    match month {
        7..=11 => 30,
        12 if is_jalali_leap_year(year) => 30,
        12 => 29,
        _ => 31,
    }
}

pub fn days_in_gregorian_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_gregorian_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

pub fn days_in_month(kind: CalendarKind, year: i32, month: u32) -> u32 {
    match kind {
        CalendarKind::Jalali => days_in_jalali_month(year, month),
        CalendarKind::Gregorian => days_in_gregorian_month(year, month),
    }
}

/// Keep the previously selected day if it still exists in the new month.
///
/// Returns `None` when it does not. The day is left unset rather than
/// clamped down to `max_days`.
pub fn update_day_selection(previous_day: u32, max_days: u32) -> Option<u32> {
    (previous_day <= max_days).then_some(previous_day)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
