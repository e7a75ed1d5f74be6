//! Host-local time resolution and configured business day boundaries.

use chrono::{DateTime, Local, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use datekit_shared::{BusinessDayConfig, ClockConfig, DateUtilResult, Instant};
use rust_decimal::Decimal;
use tracing::warn;

use crate::day_bounds::{set_end_of_day, set_start_of_day};
use crate::options::{EndOfDayOptions, StartOfDayOptions, WorkingDaysOptions};
use crate::working_days::working_days_from;

/// Resolves "local time" for the date operations.
///
/// Uses the configured IANA zone when there is one, otherwise the process
/// local zone. The offset is read once per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock {
    tz: Option<Tz>,
}

impl LocalClock {
    /// Clock in the process local zone.
    #[must_use]
    pub const fn host() -> Self {
        Self { tz: None }
    }

    /// Clock in a fixed IANA zone.
    #[must_use]
    pub const fn in_zone(tz: Tz) -> Self {
        Self { tz: Some(tz) }
    }

    /// Builds the clock from configuration.
    ///
    /// An unknown timezone name is logged and ignored.
    #[must_use]
    pub fn from_config(config: &ClockConfig) -> Self {
        let tz = config
            .timezone
            .as_deref()
            .and_then(|name| match name.parse::<Tz>() {
                Ok(tz) => Some(tz),
                Err(err) => {
                    warn!(timezone = name, error = %err, "Unknown timezone, using process local zone");
                    None
                }
            });
        Self { tz }
    }

    /// Returns the configured zone, if any.
    #[must_use]
    pub const fn zone(&self) -> Option<Tz> {
        self.tz
    }

    /// Returns the local offset in effect at `utc`.
    #[must_use]
    pub fn offset_at(&self, utc: &DateTime<Utc>) -> chrono::FixedOffset {
        match self.tz {
            Some(tz) => tz.offset_from_utc_datetime(&utc.naive_utc()).fix(),
            None => Local.offset_from_utc_datetime(&utc.naive_utc()).fix(),
        }
    }

    /// Renders `utc` as an instant at the local offset.
    #[must_use]
    pub fn localize(&self, utc: DateTime<Utc>) -> Instant {
        utc.with_timezone(&self.offset_at(&utc))
    }

    /// Current instant at the local offset.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.localize(Utc::now())
    }

    /// Today's local calendar date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Counts working days, seeding the boundaries with this clock's today.
    pub fn working_days(&self, options: &WorkingDaysOptions) -> DateUtilResult<u32> {
        working_days_from(options, self.today())
    }
}

/// Configured start and end of the business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessDay {
    start_hour: u32,
    start_mins: u32,
    end_hour: u32,
    end_mins: u32,
}

impl BusinessDay {
    /// Creates business day boundaries.
    #[must_use]
    pub const fn new(start_hour: u32, start_mins: u32, end_hour: u32, end_mins: u32) -> Self {
        Self {
            start_hour,
            start_mins,
            end_hour,
            end_mins,
        }
    }

    /// Builds the boundaries from configuration.
    #[must_use]
    pub const fn from_config(config: &BusinessDayConfig) -> Self {
        Self::new(
            config.start_hour,
            config.start_mins,
            config.end_hour,
            config.end_mins,
        )
    }

    /// `i_date` moved to the start of the business day, via `set_start_of_day`.
    pub fn start_of(&self, i_date: Instant) -> DateUtilResult<Instant> {
        set_start_of_day(&StartOfDayOptions::new(
            i_date,
            Decimal::from(self.start_hour),
            Decimal::from(self.start_mins),
        ))
    }

    /// `i_date` moved to the end of the business day, via `set_end_of_day`.
    pub fn end_of(&self, i_date: Instant) -> DateUtilResult<Instant> {
        set_end_of_day(&EndOfDayOptions::new(
            i_date,
            Decimal::from(self.end_hour),
            Decimal::from(self.end_mins),
        ))
    }
}

impl Default for BusinessDay {
    fn default() -> Self {
        Self::from_config(&BusinessDayConfig::default())
    }
}
