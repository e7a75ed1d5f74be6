//! Calendar setters with legacy rollover.
//!
//! Out-of-range fields are normalized instead of rejected: day 0 is the last
//! day of the previous month, month 12 is January of the next year, and a
//! day-of-month that does not exist in the new month spills into the next
//! one. Each setter keeps the fields it does not touch.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Builds a date from a year, a zero-based month and a day-of-month, any of
/// which may be out of range.
///
/// Returns `None` if the result cannot be represented.
pub fn make_day(year: i64, month0: i64, day: i64) -> Option<NaiveDate> {
    let year = i32::try_from(year.checked_add(month0.div_euclid(12))?).ok()?;
    let month = u32::try_from(month0.rem_euclid(12)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = day.checked_sub(1)?;
    match u64::try_from(offset) {
        Ok(forward) => first.checked_add_days(Days::new(forward)),
        Err(_) => first.checked_sub_days(Days::new(offset.unsigned_abs())),
    }
}

/// Sets the year, keeping month and day-of-month.
pub fn set_full_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    make_day(i64::from(year), i64::from(date.month0()), i64::from(date.day()))
}

/// Sets the zero-based month, keeping year and day-of-month.
pub fn set_month(date: NaiveDate, month0: u32) -> Option<NaiveDate> {
    make_day(i64::from(date.year()), i64::from(month0), i64::from(date.day()))
}

/// Sets the day-of-month, keeping year and month.
pub fn set_date(date: NaiveDate, day: i64) -> Option<NaiveDate> {
    make_day(i64::from(date.year()), i64::from(date.month0()), day)
}

/// Returns true for Monday through Friday.
#[must_use]
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
