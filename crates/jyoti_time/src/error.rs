//! Error types for calendar input.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day is not valid for the given month (and year, when known).
    InvalidDay {
        year: Option<i32>,
        month: u32,
        day: u32,
    },
    /// Year outside the supported four-digit range 1..=9999.
    YearOutOfRange(i32),
    /// Well-formed clock text naming a time that does not exist.
    InvalidTime(String),
    /// Input string did not match the expected layout.
    Parse(String),
}

impl CalendarError {
    /// True for the variants that describe an impossible calendar date.
    pub fn is_invalid_date(&self) -> bool {
        matches!(
            self,
            Self::InvalidMonth(_) | Self::InvalidDay { .. } | Self::YearOutOfRange(_)
        )
    }
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid date: month {m} is not in 1..=12"),
            Self::InvalidDay {
                year: Some(y),
                month,
                day,
            } => write!(f, "invalid date: {y:04}-{month:02} has no day {day}"),
            Self::InvalidDay {
                year: None,
                month,
                day,
            } => write!(f, "invalid date: month {month} has no day {day}"),
            Self::YearOutOfRange(y) => write!(f, "invalid date: year {y} is not in 1..=9999"),
            Self::InvalidTime(t) => write!(f, "invalid time: {t}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for CalendarError {}
