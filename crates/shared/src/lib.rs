//! Shared types, errors, and configuration for Datekit.
//!
//! This crate provides common pieces used by the date operations:
//! - The `Instant` type and the hours/minutes pair
//! - The short month name table
//! - The error type raised by every operation
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;


pub use config::{AppConfig, BusinessDayConfig, ClockConfig};
pub use error::{DateUtilError, DateUtilResult};
pub use types::{HoursMinutes, Instant};
