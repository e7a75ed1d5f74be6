//! Start and end of day normalization.
//!
//! The requested hour is shifted by the instant's offset before it is set
//! on the local wall clock, the same way the legacy helpers compensated for
//! a server running in a different zone. For whole-hour offsets the result
//! therefore reads `hour:mins` in UTC; at a zero offset it reads `hour:mins`
//! locally too.

use chrono::{NaiveTime, TimeDelta, Timelike};
use datekit_shared::{DateUtilError, DateUtilResult, Instant};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::options::{EndOfDayOptions, OptionsRecord, StartOfDayOptions};

const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// Returns `iDate` with its time set to `endHour:endMins:00`, offset-adjusted.
///
/// Sub-second precision of `iDate` is kept.
pub fn set_end_of_day(options: &EndOfDayOptions) -> DateUtilResult<Instant> {
    let (i_date, end_hour, end_mins) = options.require()?;
    set_time(&i_date, end_hour, end_mins)
}

/// Returns `iDate` with its time set to `startHour:startMins:00`, offset-adjusted.
///
/// Sub-second precision of `iDate` is kept.
pub fn set_start_of_day(options: &StartOfDayOptions) -> DateUtilResult<Instant> {
    let (i_date, start_hour, start_mins) = options.require()?;
    set_time(&i_date, start_hour, start_mins)
}

/// Hours west of UTC, i.e. the legacy "timezone offset in minutes / 60".
fn offset_hours(i_date: &Instant) -> Decimal {
    Decimal::from(-i_date.offset().local_minus_utc()) / SECONDS_PER_HOUR
}

fn set_time(i_date: &Instant, hour: Decimal, mins: Decimal) -> DateUtilResult<Instant> {
    let out_of_range = || DateUtilError::OutOfRange(format!("{hour}:{mins} on {i_date}"));

    let hours = hour
        .checked_sub(offset_hours(i_date))
        .and_then(|h| h.trunc().to_i64())
        .and_then(TimeDelta::try_hours)
        .ok_or_else(out_of_range)?;
    let minutes = mins
        .trunc()
        .to_i64()
        .and_then(TimeDelta::try_minutes)
        .ok_or_else(out_of_range)?;

    let local = i_date.naive_local();
    let subsec = TimeDelta::nanoseconds(i64::from(local.nanosecond()));

    local
        .date()
        .and_time(NaiveTime::MIN)
        .checked_add_signed(hours)
        .and_then(|t| t.checked_add_signed(minutes))
        .and_then(|t| t.checked_add_signed(subsec))
        .and_then(|t| t.and_local_timezone(*i_date.offset()).single())
        .ok_or_else(out_of_range)
}
