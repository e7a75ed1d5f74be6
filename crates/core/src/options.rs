//! Options records and the required-argument guard.
//!
//! Every operation takes a single options struct. Required fields are
//! `Option<T>`; an absent value is `None`. Records can also be read from a
//! JSON object keyed by the camelCase parameter names (`iDate`, `days`, ...),
//! in which case `null`, `""` and `false` count as missing while numeric
//! zero stays present.

use chrono::{DateTime, FixedOffset};
use datekit_shared::{DateUtilError, DateUtilResult, Instant};
use rust_decimal::Decimal;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// An options record accepted by one of the date operations.
pub trait OptionsRecord: DeserializeOwned {
    /// The validated arguments.
    type Args;

    /// Checks every required field and returns the validated arguments.
    ///
    /// Fails with `MissingArgument` naming every missing field.
    fn require(&self) -> DateUtilResult<Self::Args>;

    /// Reads the record from a JSON object.
    fn from_record(record: Value) -> DateUtilResult<Self> {
        Ok(serde_json::from_value(record)?)
    }
}

/// Fails if any of the `(name, present)` checks is not present.
///
/// The error lists every missing name, in the order given.
pub fn validate_required(checks: &[(&'static str, bool)]) -> DateUtilResult<()> {
    if checks.iter().all(|(_, present)| *present) {
        return Ok(());
    }
    Err(missing_argument(checks))
}

fn missing_argument(checks: &[(&'static str, bool)]) -> DateUtilError {
    let missing: Vec<&str> = checks
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();
    debug!(missing = %missing.join(", "), "Required argument missing");
    DateUtilError::missing(missing)
}

/// Reads an optional field, treating `null`, `""` and `false` as absent.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null | Value::Bool(false)) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(value) => T::deserialize(value).map(Some).map_err(D::Error::custom),
    }
}

/// Options for `add_days` and `subtract_days`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaysOptions {
    /// Base date.
    #[serde(default, deserialize_with = "present")]
    pub i_date: Option<Instant>,
    /// Number of days, fractional or negative.
    #[serde(default, deserialize_with = "present")]
    pub days: Option<Decimal>,
}

impl DaysOptions {
    /// Creates options with every field present.
    #[must_use]
    pub fn new(i_date: Instant, days: Decimal) -> Self {
        Self {
            i_date: Some(i_date),
            days: Some(days),
        }
    }
}

impl OptionsRecord for DaysOptions {
    type Args = (Instant, Decimal);

    fn require(&self) -> DateUtilResult<Self::Args> {
        match (self.i_date, self.days) {
            (Some(i_date), Some(days)) => Ok((i_date, days)),
            (i_date, days) => Err(missing_argument(&[
                ("iDate", i_date.is_some()),
                ("days", days.is_some()),
            ])),
        }
    }
}

/// Options for `mins_to_dec_hours` and `mins_to_hours_mins`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinutesOptions {
    /// Number of minutes to convert.
    #[serde(default, deserialize_with = "present")]
    pub minutes: Option<Decimal>,
}

impl MinutesOptions {
    /// Creates options with every field present.
    #[must_use]
    pub fn new(minutes: Decimal) -> Self {
        Self {
            minutes: Some(minutes),
        }
    }
}

impl OptionsRecord for MinutesOptions {
    type Args = Decimal;

    fn require(&self) -> DateUtilResult<Self::Args> {
        self.minutes
            .ok_or_else(|| missing_argument(&[("minutes", false)]))
    }
}

/// Options for `later_date`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaterDateOptions {
    /// First date to compare.
    #[serde(default, deserialize_with = "present")]
    pub date_zero: Option<Instant>,
    /// Second date to compare.
    #[serde(default, deserialize_with = "present")]
    pub date_one: Option<Instant>,
}

impl LaterDateOptions {
    /// Creates options with every field present.
    #[must_use]
    pub fn new(date_zero: Instant, date_one: Instant) -> Self {
        Self {
            date_zero: Some(date_zero),
            date_one: Some(date_one),
        }
    }
}

impl OptionsRecord for LaterDateOptions {
    type Args = (Instant, Instant);

    fn require(&self) -> DateUtilResult<Self::Args> {
        match (self.date_zero, self.date_one) {
            (Some(date_zero), Some(date_one)) => Ok((date_zero, date_one)),
            (date_zero, date_one) => Err(missing_argument(&[
                ("dateZero", date_zero.is_some()),
                ("dateOne", date_one.is_some()),
            ])),
        }
    }
}

/// Options for `working_days`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingDaysOptions {
    /// First day of the range.
    #[serde(default, deserialize_with = "present")]
    pub start_date: Option<Instant>,
    /// Last day of the range.
    #[serde(default, deserialize_with = "present")]
    pub end_date: Option<Instant>,
    /// Whether the start and end days themselves are counted. Defaults to false.
    #[serde(default, deserialize_with = "present")]
    pub included: Option<bool>,
}

impl WorkingDaysOptions {
    /// Creates options with every field present.
    #[must_use]
    pub fn new(start_date: Instant, end_date: Instant, included: bool) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            included: Some(included),
        }
    }
}

impl OptionsRecord for WorkingDaysOptions {
    type Args = (Instant, Instant, bool);

    fn require(&self) -> DateUtilResult<Self::Args> {
        match (self.start_date, self.end_date) {
            (Some(start_date), Some(end_date)) => {
                Ok((start_date, end_date, self.included.unwrap_or(false)))
            }
            (start_date, end_date) => Err(missing_argument(&[
                ("startDate", start_date.is_some()),
                ("endDate", end_date.is_some()),
            ])),
        }
    }
}

/// Options for `set_end_of_day`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndOfDayOptions {
    /// Base date.
    #[serde(default, deserialize_with = "present")]
    pub i_date: Option<Instant>,
    /// Hour to set, 24 hour clock.
    #[serde(default, deserialize_with = "present")]
    pub end_hour: Option<Decimal>,
    /// Minutes to set.
    #[serde(default, deserialize_with = "present")]
    pub end_mins: Option<Decimal>,
}

impl EndOfDayOptions {
    /// Creates options with every field present.
    #[must_use]
    pub fn new(i_date: Instant, end_hour: Decimal, end_mins: Decimal) -> Self {
        Self {
            i_date: Some(i_date),
            end_hour: Some(end_hour),
            end_mins: Some(end_mins),
        }
    }
}

impl OptionsRecord for EndOfDayOptions {
    type Args = (Instant, Decimal, Decimal);

    fn require(&self) -> DateUtilResult<Self::Args> {
        match (self.i_date, self.end_hour, self.end_mins) {
            (Some(i_date), Some(end_hour), Some(end_mins)) => Ok((i_date, end_hour, end_mins)),
            (i_date, end_hour, end_mins) => Err(missing_argument(&[
                ("iDate", i_date.is_some()),
                ("endHour", end_hour.is_some()),
                ("endMins", end_mins.is_some()),
            ])),
        }
    }
}

/// Options for `set_start_of_day`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartOfDayOptions {
    /// Base date.
    #[serde(default, deserialize_with = "present")]
    pub i_date: Option<Instant>,
    /// Hour to set, 24 hour clock.
    #[serde(default, deserialize_with = "present")]
    pub start_hour: Option<Decimal>,
    /// Minutes to set.
    #[serde(default, deserialize_with = "present")]
    pub start_mins: Option<Decimal>,
}

impl StartOfDayOptions {
    /// Creates options with every field present.
    #[must_use]
    pub fn new(i_date: Instant, start_hour: Decimal, start_mins: Decimal) -> Self {
        Self {
            i_date: Some(i_date),
            start_hour: Some(start_hour),
            start_mins: Some(start_mins),
        }
    }
}

impl OptionsRecord for StartOfDayOptions {
    type Args = (Instant, Decimal, Decimal);

    fn require(&self) -> DateUtilResult<Self::Args> {
        match (self.i_date, self.start_hour, self.start_mins) {
            (Some(i_date), Some(start_hour), Some(start_mins)) => {
                Ok((i_date, start_hour, start_mins))
            }
            (i_date, start_hour, start_mins) => Err(missing_argument(&[
                ("iDate", i_date.is_some()),
                ("startHour", start_hour.is_some()),
                ("startMins", start_mins.is_some()),
            ])),
        }
    }
}

/// Parses an RFC 3339 timestamp into an `Instant`.
///
/// Convenience for building options from text.
pub fn parse_instant(text: &str) -> DateUtilResult<Instant> {
    Ok(DateTime::<FixedOffset>::parse_from_rfc3339(text)?)
}
