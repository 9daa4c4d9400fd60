//! Calendar date types for the converter.
//!
//! Jalali and Gregorian dates are separate types so a date from one
//! calendar can only become the other through a [`DateConverter`].
//!
//! [`DateConverter`]: crate::services::conversion::DateConverter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Years offered by the Jalali year selector.
pub const JALALI_YEARS: RangeInclusive<i32> = 1300..=1500;

/// Years offered by the Gregorian year selector.
pub const GREGORIAN_YEARS: RangeInclusive<i32> = 1900..=2100;

pub const JALALI_MONTHS_PERSIAN: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

pub const JALALI_MONTHS_LATIN: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

pub const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Which calendar a date or selector belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarKind {
    Jalali,
    Gregorian,
}

impl CalendarKind {
    pub fn year_range(self) -> RangeInclusive<i32> {
        match self {
            CalendarKind::Jalali => JALALI_YEARS,
            CalendarKind::Gregorian => GREGORIAN_YEARS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CalendarKind::Jalali => "Jalali",
            CalendarKind::Gregorian => "Gregorian",
        }
    }
}

/// How Jalali month names are written.
///
/// egui's bundled fonts have no Arabic-script glyphs, so the Persian names
/// only render once a font with them has been loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthNameStyle {
    #[default]
    Latin,
    Persian,
}

/// Name of a month, or an empty string for a month outside 1-12.
pub fn month_name(kind: CalendarKind, month: u32, style: MonthNameStyle) -> &'static str {
    let table = match (kind, style) {
        (CalendarKind::Gregorian, _) => &GREGORIAN_MONTHS,
        (CalendarKind::Jalali, MonthNameStyle::Latin) => &JALALI_MONTHS_LATIN,
        (CalendarKind::Jalali, MonthNameStyle::Persian) => &JALALI_MONTHS_PERSIAN,
    };
    month
        .checked_sub(1)
        .and_then(|index| table.get(index as usize))
        .copied()
        .unwrap_or("")
}

/// A date in the Jalali (Persian solar) calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl JalaliDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Result text shown under the "Gregorian → Jalali" panel, e.g. "1 Farvardin 1403".
    pub fn display_with(&self, style: MonthNameStyle) -> String {
        format!(
            "{} {} {}",
            self.day,
            month_name(CalendarKind::Jalali, self.month, style),
            self.year
        )
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl GregorianDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Result text shown under the "Jalali → Gregorian" panel, e.g. "20 March 2024".
    pub fn display_long(&self) -> String {
        format!(
            "{} {} {}",
            self.day,
            month_name(CalendarKind::Gregorian, self.month, MonthNameStyle::Latin),
            self.year
        )
    }
}

impl From<chrono::NaiveDate> for GregorianDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_gregorian_display_long() {
        let date = GregorianDate::new(2024, 3, 20);
        assert_eq!(date.display_long(), "20 March 2024");
    }

    #[test]
    fn test_jalali_display_styles() {
        let date = JalaliDate::new(1403, 1, 1);
        assert_eq!(date.display_with(MonthNameStyle::Latin), "1 Farvardin 1403");
        assert_eq!(date.display_with(MonthNameStyle::Persian), "1 فروردین 1403");
    }

    #[test]
    fn test_month_name_out_of_range_is_empty() {
        assert_eq!(month_name(CalendarKind::Gregorian, 0, MonthNameStyle::Latin), "");
        assert_eq!(month_name(CalendarKind::Jalali, 13, MonthNameStyle::Persian), "");
        assert_eq!(month_name(CalendarKind::Jalali, 12, MonthNameStyle::Latin), "Esfand");
    }

    #[test]
    fn test_year_ranges() {
        assert_eq!(CalendarKind::Jalali.year_range(), 1300..=1500);
        assert_eq!(CalendarKind::Gregorian.year_range(), 1900..=2100);
    }

    #[test]
    fn test_from_naive_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(GregorianDate::from(date), GregorianDate::new(2024, 2, 29));
    }

    #[test]
    fn test_numeric_display() {
        assert_eq!(JalaliDate::new(1403, 1, 1).to_string(), "1403/01/01");
        assert_eq!(GregorianDate::new(2024, 3, 20).to_string(), "2024-03-20");
    }
}
