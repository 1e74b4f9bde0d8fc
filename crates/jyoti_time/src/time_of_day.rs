//! 24-hour wall-clock time as entered on a birth profile.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::format::ParseErrorKind;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Hour and minute on a 24-hour clock, no time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Result<Self, CalendarError> {
        match NaiveTime::from_hms_opt(hour, minute, 0) {
            Some(_) => Ok(Self { hour, minute }),
            None => Err(CalendarError::InvalidTime(format!("{hour:02}:{minute:02}"))),
        }
    }

    pub const fn hour(self) -> u32 {
        self.hour
    }

    pub const fn minute(self) -> u32 {
        self.minute
    }

    /// Minutes since midnight (0..1440).
    pub const fn minutes_since_midnight(self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = CalendarError;

    /// Parse `"HH:MM"` or `"HH:MM:SS"`. Seconds are checked, then dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let format = if s.matches(':').count() == 2 {
            "%H:%M:%S"
        } else {
            "%H:%M"
        };
        let time = NaiveTime::parse_from_str(s, format).map_err(|e| match e.kind() {
            ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => {
                CalendarError::InvalidTime(s.to_string())
            }
            _ => CalendarError::Parse(format!("expected HH:MM, got '{s}': {e}")),
        })?;
        Self::new(time.hour(), time.minute())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = CalendarError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let t: TimeOfDay = "07:05".parse().unwrap();
        assert_eq!(t.hour(), 7);
        assert_eq!(t.minute(), 5);
        assert_eq!(t.to_string(), "07:05");
    }

    #[test]
    fn parse_with_seconds() {
        let t: TimeOfDay = "23:59:30".parse().unwrap();
        assert_eq!(t.minutes_since_midnight(), 23 * 60 + 59);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            "24:00".parse::<TimeOfDay>(),
            Err(CalendarError::InvalidTime("24:00".to_string()))
        );
        assert!(matches!(
            "12:60".parse::<TimeOfDay>(),
            Err(CalendarError::InvalidTime(_))
        ));
        assert!(matches!(
            "12:30:99".parse::<TimeOfDay>(),
            Err(CalendarError::InvalidTime(_))
        ));
        assert_eq!(
            TimeOfDay::new(7, 60),
            Err(CalendarError::InvalidTime("07:60".to_string()))
        );
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            "noon".parse::<TimeOfDay>(),
            Err(CalendarError::Parse(_))
        ));
        for s in ["12:30:zz", "+7:+5", "12", "12:30:00:00", "12-30"] {
            assert!(
                matches!(s.parse::<TimeOfDay>(), Err(CalendarError::Parse(_))),
                "{s}"
            );
        }
    }
}
