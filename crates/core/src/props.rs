//! Property-based tests for the date operations.

use chrono::{DateTime, Datelike, Days, NaiveDate};
use datekit_shared::Instant;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::compare::{LaterDate, later_date};
use crate::day_bounds::set_start_of_day;
use crate::days::{add_days, subtract_days};
use crate::hours::{mins_to_dec_hours, mins_to_hours_mins};
use crate::options::{
    DaysOptions, LaterDateOptions, MinutesOptions, StartOfDayOptions, WorkingDaysOptions,
};
use crate::working_days::working_days_from;

/// Strategy for instants between 1970 and ~2100, at a whole-hour offset.
fn instant() -> impl Strategy<Value = Instant> {
    (0i64..4_102_444_800_000, -12i32..=14).prop_map(|(millis, hours)| {
        let offset = chrono::FixedOffset::east_opt(hours * 3600).unwrap();
        DateTime::from_timestamp_millis(millis)
            .unwrap()
            .with_timezone(&offset)
    })
}

/// Strategy for calendar dates in 2000-2049.
fn date() -> impl Strategy<Value = NaiveDate> {
    (0u64..18_262).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

fn at_noon_utc(date: NaiveDate) -> Instant {
    date.and_hms_opt(12, 0, 0).unwrap().and_utc().fixed_offset()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Adding then subtracting the same whole number of days returns the
    /// original instant.
    #[test]
    fn prop_add_then_subtract_round_trips(
        base in instant(),
        days in -100_000i64..100_000,
    ) {
        let days = Decimal::from(days);
        let later = add_days(&DaysOptions::new(base, days)).unwrap();
        let back = subtract_days(&DaysOptions::new(later, days)).unwrap();
        prop_assert_eq!(back.timestamp_millis(), base.timestamp_millis());
    }

    /// Non-negative minutes are recovered exactly from the hours/minutes pair.
    #[test]
    fn prop_hours_mins_recompose(minutes in 0i64..1_000_000) {
        let minutes = Decimal::from(minutes);
        let pair = mins_to_hours_mins(&MinutesOptions::new(minutes)).unwrap();
        prop_assert_eq!(pair.hours * Decimal::from(60) + pair.minutes, minutes);
        prop_assert!(pair.minutes < Decimal::from(60));
    }

    /// Decimal hours never carry more than two decimal places and stay
    /// within a rounding step of the exact value.
    #[test]
    fn prop_dec_hours_two_places(minutes in 0i64..1_000_000) {
        let minutes = Decimal::from(minutes);
        let hours = mins_to_dec_hours(&MinutesOptions::new(minutes)).unwrap();
        prop_assert!(hours.scale() <= 2);
        let exact = minutes / Decimal::from(60);
        prop_assert!((hours - exact).abs() <= Decimal::new(5, 3));
    }

    /// Swapping the arguments swaps First and Second; ties stay ties.
    #[test]
    fn prop_later_date_is_antisymmetric(a in instant(), b in instant()) {
        let forward = later_date(&LaterDateOptions::new(a, b)).unwrap();
        let backward = later_date(&LaterDateOptions::new(b, a)).unwrap();
        let expected = match forward {
            LaterDate::Neither => LaterDate::Neither,
            LaterDate::First => LaterDate::Second,
            LaterDate::Second => LaterDate::First,
        };
        prop_assert_eq!(backward, expected);
    }

    /// Including the endpoints never counts fewer days than excluding them,
    /// and no count exceeds the number of calendar days in range.
    #[test]
    fn prop_working_days_bounds(
        start in date(),
        span in 0u64..400,
        today in date(),
    ) {
        let end = start.checked_add_days(Days::new(span)).unwrap();
        // Reference date on the 1st never triggers day-of-month carry.
        let today = today.with_day(1).unwrap();

        let inclusive = working_days_from(
            &WorkingDaysOptions::new(at_noon_utc(start), at_noon_utc(end), true),
            today,
        ).unwrap();
        let exclusive = working_days_from(
            &WorkingDaysOptions::new(at_noon_utc(start), at_noon_utc(end), false),
            today,
        ).unwrap();

        prop_assert!(exclusive <= inclusive);
        prop_assert!(u64::from(inclusive) <= span + 1);
        prop_assert!(inclusive - exclusive <= 2);
    }

    /// Start of day at a zero offset reads the requested wall-clock time.
    #[test]
    fn prop_start_of_day_sets_wall_clock(
        date in date(),
        hour in 0u32..24,
        mins in 0u32..60,
    ) {
        let result = set_start_of_day(&StartOfDayOptions::new(
            at_noon_utc(date),
            Decimal::from(hour),
            Decimal::from(mins),
        )).unwrap();
        prop_assert_eq!(result.date_naive(), date);
        prop_assert_eq!(
            result.time(),
            chrono::NaiveTime::from_hms_opt(hour, mins, 0).unwrap()
        );
    }
}
