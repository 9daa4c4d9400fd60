//! Conversion between Jalali and Gregorian dates.
//!
//! The UI only sees the [`DateConverter`] trait. [`IcuConverter`] is the
//! implementation the application ships with, backed by the ICU4X Persian
//! calendar.

use crate::models::calendar::{GregorianDate, JalaliDate};
use chrono::NaiveDate;
use icu_calendar::cal::{Iso, Persian};
use icu_calendar::Date;

/// First Jalali year for which the 33-year rule matches the astronomical calendar.
pub const MIN_JALALI_YEAR: i32 = 1178;

/// Last Jalali year covered by ICU4X's override table.
pub const MAX_JALALI_YEAR: i32 = 3000;

/// Gregorian years whose every day falls inside the Jalali range above.
pub const MIN_GREGORIAN_YEAR: i32 = MIN_JALALI_YEAR + 622;
pub const MAX_GREGORIAN_YEAR: i32 = MAX_JALALI_YEAR + 621;

/// Errors reported when a date cannot be converted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("{calendar} year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange {
        calendar: &'static str,
        year: i32,
        min: i32,
        max: i32,
    },
    #[error("{calendar} month {month} is invalid (expected 1-12)")]
    InvalidMonth { calendar: &'static str, month: u32 },
    #[error("day {day} does not exist in {calendar} month {month} of {year}")]
    InvalidDay {
        calendar: &'static str,
        year: i32,
        month: u32,
        day: u32,
    },
}

/// Converts dates between the two calendars.
///
/// Implementations must be pure: the same input always gives the same output.
#[cfg_attr(test, mockall::automock)]
pub trait DateConverter {
    fn gregorian_to_solar(&self, date: GregorianDate) -> Result<JalaliDate, ConversionError>;
    fn solar_to_gregorian(&self, date: JalaliDate) -> Result<GregorianDate, ConversionError>;
}

/// Converter backed by `icu_calendar`'s Persian calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuConverter;

impl IcuConverter {
    pub fn new() -> Self {
        Self
    }

    /// Whether a Jalali year is leap in the real calendar.
    ///
    /// This is not the simplified rule the day selector uses.
    pub fn is_leap_year(&self, jalali_year: i32) -> Result<bool, ConversionError> {
        check_year("Jalali", jalali_year, MIN_JALALI_YEAR, MAX_JALALI_YEAR)?;
        let date = persian_date(JalaliDate::new(jalali_year, 1, 1))?;
        Ok(date.is_in_leap_year())
    }
}

impl DateConverter for IcuConverter {
    fn gregorian_to_solar(&self, date: GregorianDate) -> Result<JalaliDate, ConversionError> {
        check_month("Gregorian", date.month)?;
        check_year("Gregorian", date.year, MIN_GREGORIAN_YEAR, MAX_GREGORIAN_YEAR)?;

        let invalid_day = || ConversionError::InvalidDay {
            calendar: "Gregorian",
            year: date.year,
            month: date.month,
            day: date.day,
        };
        if NaiveDate::from_ymd_opt(date.year, date.month, date.day).is_none() {
            return Err(invalid_day());
        }

        let iso = Date::try_new_iso(date.year, date.month as u8, date.day as u8)
            .map_err(|_| invalid_day())?;
        let persian = iso.to_calendar(Persian);

        Ok(JalaliDate::new(
            persian.era_year().year,
            u32::from(persian.month().ordinal),
            u32::from(persian.day_of_month().0),
        ))
    }

    fn solar_to_gregorian(&self, date: JalaliDate) -> Result<GregorianDate, ConversionError> {
        check_month("Jalali", date.month)?;
        check_year("Jalali", date.year, MIN_JALALI_YEAR, MAX_JALALI_YEAR)?;

        let iso = persian_date(date)?.to_calendar(Iso);

        Ok(GregorianDate::new(
            iso.era_year().year,
            u32::from(iso.month().ordinal),
            u32::from(iso.day_of_month().0),
        ))
    }
}

fn check_month(calendar: &'static str, month: u32) -> Result<(), ConversionError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ConversionError::InvalidMonth { calendar, month })
    }
}

fn check_year(
    calendar: &'static str,
    year: i32,
    min: i32,
    max: i32,
) -> Result<(), ConversionError> {
    if (min..=max).contains(&year) {
        Ok(())
    } else {
        Err(ConversionError::YearOutOfRange {
            calendar,
            year,
            min,
            max,
        })
    }
}

/// Build an ICU Persian date; month and year are already checked.
fn persian_date(date: JalaliDate) -> Result<Date<Persian>, ConversionError> {
    let invalid_day = || ConversionError::InvalidDay {
        calendar: "Jalali",
        year: date.year,
        month: date.month,
        day: date.day,
    };
    let day = u8::try_from(date.day).map_err(|_| invalid_day())?;
    Date::try_new_persian(date.year, date.month as u8, day).map_err(|_| invalid_day())
}
