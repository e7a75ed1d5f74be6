//! Day addition and subtraction on the epoch-millisecond value.
//!
//! A "day" here is exactly 86 400 000 ms. No calendar rollover is applied,
//! so across a DST change the wall-clock time shifts by the DST delta.

use chrono::DateTime;
use datekit_shared::types::MILLIS_PER_DAY;
use datekit_shared::{DateUtilError, DateUtilResult, Instant};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::options::{DaysOptions, OptionsRecord};

/// Adds `days` (fractional or negative) to `iDate`.
pub fn add_days(options: &DaysOptions) -> DateUtilResult<Instant> {
    let (i_date, days) = options.require()?;
    let later = Decimal::from(i_date.timestamp_millis())
        .checked_add(day_millis(days)?)
        .ok_or_else(|| out_of_range(days))?;
    to_instant(&i_date, later)
}

/// Subtracts `days` (fractional or negative) from `iDate`.
pub fn subtract_days(options: &DaysOptions) -> DateUtilResult<Instant> {
    let (i_date, days) = options.require()?;
    let earlier = Decimal::from(i_date.timestamp_millis())
        .checked_sub(day_millis(days)?)
        .ok_or_else(|| out_of_range(days))?;
    to_instant(&i_date, earlier)
}

fn day_millis(days: Decimal) -> DateUtilResult<Decimal> {
    days.checked_mul(Decimal::from(MILLIS_PER_DAY))
        .ok_or_else(|| out_of_range(days))
}

/// Truncates `millis` toward zero and renders it in `base`'s offset.
fn to_instant(base: &Instant, millis: Decimal) -> DateUtilResult<Instant> {
    millis
        .trunc()
        .to_i64()
        .and_then(DateTime::from_timestamp_millis)
        .map(|utc| utc.with_timezone(base.offset()))
        .ok_or_else(|| DateUtilError::OutOfRange(format!("{millis} ms since epoch")))
}

fn out_of_range(days: Decimal) -> DateUtilError {
    DateUtilError::OutOfRange(format!("{days} days"))
}
