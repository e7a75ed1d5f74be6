//! Minutes to hours conversions.

use datekit_shared::{DateUtilResult, HoursMinutes};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::options::{MinutesOptions, OptionsRecord};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Returns minutes as decimal hours, the fraction rounded to 2 places.
///
/// The whole hours are floored and the remainder (sign of `minutes`) is
/// rounded half away from zero, so 150 gives 2.5 and 100 gives 1.67.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use datekit_core::hours::mins_to_dec_hours;
/// use datekit_core::options::MinutesOptions;
///
/// let hours = mins_to_dec_hours(&MinutesOptions::new(dec!(100))).unwrap();
/// assert_eq!(hours, dec!(1.67));
/// ```
pub fn mins_to_dec_hours(options: &MinutesOptions) -> DateUtilResult<Decimal> {
    let minutes = options.require()?;
    let full_hours = (minutes / MINUTES_PER_HOUR).floor();
    let fraction = ((minutes % MINUTES_PER_HOUR) / MINUTES_PER_HOUR)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Ok((full_hours + fraction).normalize())
}

/// Splits minutes into whole hours and the remaining minutes.
pub fn mins_to_hours_mins(options: &MinutesOptions) -> DateUtilResult<HoursMinutes> {
    let minutes = options.require()?;
    Ok(HoursMinutes::new(
        (minutes / MINUTES_PER_HOUR).floor(),
        minutes % MINUTES_PER_HOUR,
    ))
}
