//! The instant type every date operation works on.

use chrono::{DateTime, FixedOffset};

/// An absolute point in time, rendered in its own offset for local accessors.
///
/// Arithmetic is done on the epoch-millisecond value; `year()`, `day()`,
/// `hour()` and friends read the wall clock at the carried offset.
pub type Instant = DateTime<FixedOffset>;

/// Milliseconds in one (non-calendar) day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;
