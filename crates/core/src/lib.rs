//! Date arithmetic helpers for business workflow code.
//!
//! Every operation is a stateless function of a single options record,
//! validated by the shared required-argument guard before any work is done.
//!
//! # Modules
//!
//! - `options` - Options records and the required-argument guard
//! - `days` - Day addition and subtraction
//! - `hours` - Minutes to hours conversions
//! - `compare` - Which of two dates is later
//! - `working_days` - Working days between two dates
//! - `day_bounds` - Start and end of day normalization
//! - `calendar` - Calendar setters with legacy rollover
//! - `clock` - Host-local time and business day boundaries

pub mod calendar;
pub mod clock;
pub mod compare;
pub mod day_bounds;
pub mod days;
pub mod hours;
pub mod options;
pub mod util;
pub mod working_days;

#[cfg(test)]
mod props;

pub use clock::{BusinessDay, LocalClock};
pub use compare::LaterDate;
pub use options::{OptionsRecord, validate_required};
pub use util::DateUtil;
