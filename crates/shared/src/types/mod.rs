//! Common types used across the workspace.

pub mod duration;
pub mod instant;
pub mod month;


pub use duration::HoursMinutes;
pub use instant::{Instant, MILLIS_PER_DAY};
pub use month::{SHORT_MONTH, short_month};
