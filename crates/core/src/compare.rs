//! Which of two dates is later.

use datekit_shared::DateUtilResult;
use serde::Serialize;

use crate::options::{LaterDateOptions, OptionsRecord};

/// Outcome of `later_date`.
///
/// The numeric codes are the index of the later date in
/// `[dateZero, dateOne]`, with -1 for a tie. This is not a conventional
/// comparator; callers rely on these exact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "i8")]
pub enum LaterDate {
    /// Both dates are the same instant (code -1).
    Neither,
    /// `dateZero` is strictly later (code 0).
    First,
    /// `dateOne` is strictly later (code 1).
    Second,
}

impl LaterDate {
    /// Returns the legacy code: -1, 0 or 1.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::Neither => -1,
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// Returns the index of the later date, or `None` for a tie.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Neither => None,
            Self::First => Some(0),
            Self::Second => Some(1),
        }
    }
}

impl From<LaterDate> for i8 {
    fn from(value: LaterDate) -> Self {
        value.code()
    }
}

/// Compares `dateZero` and `dateOne` on their epoch-millisecond values.
///
/// Sub-millisecond differences are ignored.
pub fn later_date(options: &LaterDateOptions) -> DateUtilResult<LaterDate> {
    let (date_zero, date_one) = options.require()?;
    let zero = date_zero.timestamp_millis();
    let one = date_one.timestamp_millis();

    if zero == one {
        return Ok(LaterDate::Neither);
    }
    if zero > one {
        return Ok(LaterDate::First);
    }
    Ok(LaterDate::Second)
}
