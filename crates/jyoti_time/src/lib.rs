//! Calendar primitives for birth-profile calculations.
//!
//! This crate provides:
//! - `CalendarDate`, a validated Gregorian date with a four-digit year
//! - `MonthDay`, a year-free month/day (Feb 29 always allowed)
//! - `TimeOfDay`, a 24-hour `HH:MM` clock time
//!
//! Nothing here reads the system clock. Callers decide what "today" is.

pub mod calendar;
pub mod error;
pub mod time_of_day;

pub use calendar::{
    CalendarDate, MAX_YEAR, MIN_YEAR, MonthDay, days_in_month, is_leap_year, max_days_in_month,
};
pub use error::CalendarError;
pub use time_of_day::TimeOfDay;
