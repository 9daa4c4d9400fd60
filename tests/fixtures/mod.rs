// Test fixtures - reusable test data
// Known Jalali/Gregorian pairs shared across test files

use persian_date_converter::models::calendar::{GregorianDate, JalaliDate};

/// Pairs of the same day in both calendars
pub mod pairs {
    use super::*;

    /// Nowruz 1403, the first day of a leap year
    pub fn nowruz_1403() -> (GregorianDate, JalaliDate) {
        (GregorianDate::new(2024, 3, 20), JalaliDate::new(1403, 1, 1))
    }

    /// The 30th of Esfand, which only exists in leap years
    pub fn esfand_30_1403() -> (GregorianDate, JalaliDate) {
        (GregorianDate::new(2025, 3, 20), JalaliDate::new(1403, 12, 30))
    }

    /// Feb 29, 2024 (Gregorian leap day)
    pub fn leap_day_2024() -> (GregorianDate, JalaliDate) {
        (GregorianDate::new(2024, 2, 29), JalaliDate::new(1402, 12, 10))
    }

    /// First and last days of the Gregorian selector range
    pub fn selector_bounds() -> Vec<(GregorianDate, JalaliDate)> {
        vec![
            (GregorianDate::new(1900, 1, 1), JalaliDate::new(1278, 10, 11)),
            (GregorianDate::new(2100, 12, 31), JalaliDate::new(1479, 10, 10)),
        ]
    }

    pub fn all() -> Vec<(GregorianDate, JalaliDate)> {
        let mut pairs = vec![nowruz_1403(), esfand_30_1403(), leap_day_2024()];
        pairs.extend(selector_bounds());
        pairs
    }
}
