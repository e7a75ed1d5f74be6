//! Single entry point for the date operations.

use chrono::NaiveDate;
use datekit_shared::types::short_month;
use datekit_shared::{DateUtilResult, HoursMinutes, Instant};
use rust_decimal::Decimal;

use crate::compare::{LaterDate, later_date};
use crate::day_bounds::{set_end_of_day, set_start_of_day};
use crate::days::{add_days, subtract_days};
use crate::hours::{mins_to_dec_hours, mins_to_hours_mins};
use crate::options::{
    DaysOptions, EndOfDayOptions, LaterDateOptions, MinutesOptions, StartOfDayOptions,
    WorkingDaysOptions,
};
use crate::working_days::{working_days, working_days_from};

/// Date utility for workflow code.
///
/// Stateless: every method is a pure function of its options record (plus
/// the host-local date for `working_days`).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use datekit_core::DateUtil;
/// use datekit_core::options::{DaysOptions, parse_instant};
///
/// let start = parse_instant("2020-06-26T10:00:00Z").unwrap();
/// let later = DateUtil::add_days(&DaysOptions::new(start, dec!(3))).unwrap();
/// assert_eq!(later, parse_instant("2020-06-29T10:00:00Z").unwrap());
/// ```
pub struct DateUtil;

impl DateUtil {
    /// Adds days to a date.
    pub fn add_days(options: &DaysOptions) -> DateUtilResult<Instant> {
        add_days(options)
    }

    /// Subtracts days from a date.
    pub fn subtract_days(options: &DaysOptions) -> DateUtilResult<Instant> {
        subtract_days(options)
    }

    /// Converts minutes to decimal hours.
    pub fn mins_to_dec_hours(options: &MinutesOptions) -> DateUtilResult<Decimal> {
        mins_to_dec_hours(options)
    }

    /// Converts minutes to whole hours and remaining minutes.
    pub fn mins_to_hours_mins(options: &MinutesOptions) -> DateUtilResult<HoursMinutes> {
        mins_to_hours_mins(options)
    }

    /// Tells which of two dates is later: 0 for the first, 1 for the second, -1 if equal.
    pub fn later_date(options: &LaterDateOptions) -> DateUtilResult<LaterDate> {
        later_date(options)
    }

    /// Counts working days between two dates.
    pub fn working_days(options: &WorkingDaysOptions) -> DateUtilResult<u32> {
        working_days(options)
    }

    /// Counts working days with an explicit "today".
    pub fn working_days_from(
        options: &WorkingDaysOptions,
        today: NaiveDate,
    ) -> DateUtilResult<u32> {
        working_days_from(options, today)
    }

    /// Sets the end-of-day time on a date.
    pub fn set_end_of_day(options: &EndOfDayOptions) -> DateUtilResult<Instant> {
        set_end_of_day(options)
    }

    /// Sets the start-of-day time on a date.
    pub fn set_start_of_day(options: &StartOfDayOptions) -> DateUtilResult<Instant> {
        set_start_of_day(options)
    }

    /// Three-letter month name for a zero-based month index.
    #[must_use]
    pub fn short_month(index: usize) -> Option<&'static str> {
        short_month(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OptionsRecord, parse_instant};
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_round_trip_through_facade() {
        let start = parse_instant("2020-06-26T10:00:00Z").unwrap();
        let later = DateUtil::add_days(&DaysOptions::new(start, dec!(7))).unwrap();
        let back = DateUtil::subtract_days(&DaysOptions::new(later, dec!(7))).unwrap();
        assert_eq!(back, start);
        assert_eq!(
            DateUtil::later_date(&LaterDateOptions::new(start, later))
                .unwrap()
                .code(),
            1
        );
    }

    #[test]
    fn test_facade_from_records() {
        let hours = DateUtil::mins_to_dec_hours(
            &MinutesOptions::from_record(json!({ "minutes": 100 })).unwrap(),
        )
        .unwrap();
        assert_eq!(hours, dec!(1.67));

        let pair = DateUtil::mins_to_hours_mins(
            &MinutesOptions::from_record(json!({ "minutes": 150 })).unwrap(),
        )
        .unwrap();
        assert_eq!(pair, HoursMinutes::new(dec!(2), dec!(30)));

        let options = WorkingDaysOptions::from_record(json!({
            "startDate": "2020-06-26T09:00:00Z",
            "endDate": "2020-06-30T09:00:00Z",
            "included": false
        }))
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(DateUtil::working_days_from(&options, today).unwrap(), 1);
    }

    #[test]
    fn test_facade_zero_hour_is_present() {
        let options = StartOfDayOptions::from_record(json!({
            "iDate": "2020-06-26T10:00:00Z",
            "startHour": 0,
            "startMins": 0
        }))
        .unwrap();
        let result = DateUtil::set_start_of_day(&options).unwrap();
        assert_eq!(result, parse_instant("2020-06-26T00:00:00Z").unwrap());

        let options = EndOfDayOptions::from_record(json!({
            "iDate": "2020-06-26T10:00:00Z",
            "endHour": 17,
            "endMins": 0
        }))
        .unwrap();
        let result = DateUtil::set_end_of_day(&options).unwrap();
        assert_eq!(result, parse_instant("2020-06-26T17:00:00Z").unwrap());
    }

    #[test]
    fn test_facade_missing_argument() {
        let options = EndOfDayOptions::from_record(json!({ "endHour": 17, "endMins": "" })).unwrap();
        let err = DateUtil::set_end_of_day(&options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "A required argument is missing: iDate, endMins."
        );
        let err = DateUtil::working_days(&WorkingDaysOptions::default()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_REQD_ARGUMENT");
    }

    #[test]
    fn test_facade_short_month() {
        assert_eq!(DateUtil::short_month(6), Some("Jul"));
        assert_eq!(DateUtil::short_month(12), None);
    }
}
