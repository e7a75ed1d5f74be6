//! Duration split into whole hours and remaining minutes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A duration expressed as whole hours plus the remaining minutes.
///
/// Serializes as a two-element array `[hours, minutes]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(Decimal, Decimal)", from = "(Decimal, Decimal)")]
pub struct HoursMinutes {
    /// Whole hours (floored).
    pub hours: Decimal,
    /// Minutes left over after the whole hours.
    pub minutes: Decimal,
}

impl HoursMinutes {
    /// Creates a new pair.
    #[must_use]
    pub const fn new(hours: Decimal, minutes: Decimal) -> Self {
        Self { hours, minutes }
    }
}

impl From<HoursMinutes> for (Decimal, Decimal) {
    fn from(value: HoursMinutes) -> Self {
        (value.hours, value.minutes)
    }
}

impl From<(Decimal, Decimal)> for HoursMinutes {
    fn from((hours, minutes): (Decimal, Decimal)) -> Self {
        Self { hours, minutes }
    }
}

impl std::fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}
