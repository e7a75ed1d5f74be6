//! Working days between two dates.
//!
//! Boundaries are rebuilt the legacy way: starting from "today", the year,
//! then the month, then the (shifted) day-of-month of each input are set one
//! after another with calendar rollover. Only the local calendar date of each
//! input is used; time-of-day is discarded.

use chrono::{Datelike, Local, NaiveDate};
use datekit_shared::{DateUtilError, DateUtilResult, Instant};
use tracing::debug;

use crate::calendar::{is_working_day, set_date, set_full_year, set_month};
use crate::options::{OptionsRecord, WorkingDaysOptions};

/// Counts Monday-Friday days between `startDate` and `endDate`.
///
/// With `included` false (the default) both endpoints are excluded. Today's
/// host-local date seeds the boundary reconstruction.
pub fn working_days(options: &WorkingDaysOptions) -> DateUtilResult<u32> {
    working_days_from(options, Local::now().date_naive())
}

/// Counts working days, seeding the boundary reconstruction with `today`.
///
/// `today` only matters when its day-of-month does not exist in an
/// intermediate month, e.g. the 31st carried into a 30-day month.
pub fn working_days_from(options: &WorkingDaysOptions, today: NaiveDate) -> DateUtilResult<u32> {
    let (start_date, end_date, included) = options.require()?;
    let shift = i64::from(!included);

    let start = boundary(today, &start_date, shift)?;
    let end = boundary(today, &end_date, -shift)?;
    debug!(%start, %end, included, "Resolved working day boundaries");

    if start > end {
        return Ok(0);
    }

    Ok(start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| is_working_day(*day))
        .fold(0, |count: u32, _| count.saturating_add(1)))
}

fn boundary(today: NaiveDate, date: &Instant, shift: i64) -> DateUtilResult<NaiveDate> {
    set_full_year(today, date.year())
        .and_then(|day| set_month(day, date.month0()))
        .and_then(|day| set_date(day, i64::from(date.day()) + shift))
        .ok_or_else(|| DateUtilError::OutOfRange(format!("working day boundary for {date}")))
}
