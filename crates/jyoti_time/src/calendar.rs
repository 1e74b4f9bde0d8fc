//! Validated Gregorian calendar dates and year-independent month-days.
//!
//! `CalendarDate` is the only way a full birth or target date enters the
//! calculation crates, so every value in circulation is a real day of the
//! proleptic Gregorian calendar with a four-digit year.
//!
//! `MonthDay` drops the year. Its day bound is taken from a leap year, so
//! February 29 is always accepted: sign tables and birth-day arithmetic have
//! to cover everyone born on a leap day.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::time_of_day::TimeOfDay;

/// Smallest supported year.
pub const MIN_YEAR: i32 = 1;
/// Largest supported year.
pub const MAX_YEAR: i32 = 9999;

/// Days in each month of a leap year, January first.
const LEAP_MONTH_LENGTHS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    let max = max_days_in_month(month)?;
    if month == 2 && !is_leap_year(year) {
        Ok(max - 1)
    } else {
        Ok(max)
    }
}

/// Largest day any year allows for `month` (29 for February).
pub fn max_days_in_month(month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    Ok(LEAP_MONTH_LENGTHS[(month - 1) as usize])
}

/// A month and day without a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Validate against the leap-year month lengths.
    pub fn new(month: u32, day: u32) -> Result<Self, CalendarError> {
        let max = max_days_in_month(month)?;
        if day == 0 || day > max {
            return Err(CalendarError::InvalidDay {
                year: None,
                month,
                day,
            });
        }
        Ok(Self { month, day })
    }

    /// `const` counterpart of [`new`](Self::new) for building fixed tables.
    pub const fn checked(month: u32, day: u32) -> Option<Self> {
        if month == 0 || month > 12 || day == 0 {
            return None;
        }
        if day > LEAP_MONTH_LENGTHS[(month - 1) as usize] {
            return None;
        }
        Some(Self { month, day })
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    /// 1-based position in a 366-day year (Jan 1 = 1, Feb 29 = 60, Dec 31 = 366).
    pub fn leap_ordinal(self) -> u32 {
        let before: u32 = LEAP_MONTH_LENGTHS[..(self.month - 1) as usize].iter().sum();
        before + self.day
    }

    /// Inverse of [`leap_ordinal`](Self::leap_ordinal). Ordinals wrap modulo 366.
    pub fn from_leap_ordinal(ordinal: u32) -> Self {
        let mut rem = (ordinal + 365) % 366;
        let mut month = 1;
        for len in LEAP_MONTH_LENGTHS {
            if rem < len {
                break;
            }
            rem -= len;
            month += 1;
        }
        Self {
            month,
            day: rem + 1,
        }
    }

    /// The day after this one, wrapping Dec 31 to Jan 1 and passing through Feb 29.
    pub fn succ(self) -> Self {
        Self::from_leap_ordinal(self.leap_ordinal() + 1)
    }

    /// The day before this one, wrapping Jan 1 to Dec 31.
    pub fn pred(self) -> Self {
        Self::from_leap_ordinal(self.leap_ordinal() + 365)
    }
}

impl Display for MonthDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = CalendarError;

    /// Parse `"MM-DD"`, two digits each.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = digit_fields(s.trim(), &[2, 2], "MM-DD")?;
        Self::new(parse_field(fields[0], "month")?, parse_field(fields[1], "day")?)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = CalendarError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MonthDay> for String {
    fn from(md: MonthDay) -> Self {
        md.to_string()
    }
}

/// A validated Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange(year));
        }
        max_days_in_month(month)?;
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(_) => Ok(Self { year, month, day }),
            None => Err(CalendarError::InvalidDay {
                year: Some(year),
                month,
                day,
            }),
        }
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    /// The year-free part of this date.
    pub fn month_day(self) -> MonthDay {
        MonthDay {
            month: self.month,
            day: self.day,
        }
    }

    /// Every date of `month` in `year`, first to last.
    pub fn month_dates(year: i32, month: u32) -> Result<Vec<Self>, CalendarError> {
        let first = Self::new(year, month, 1)?;
        let len = days_in_month(year, month)?;
        Ok((1..=len)
            .map(|day| Self {
                year: first.year,
                month: first.month,
                day,
            })
            .collect())
    }

    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = CalendarError;

    fn try_from(d: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(d.year(), d.month(), d.day())
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parse `"YYYY-MM-DD"`. An ISO time part `"THH:MM[:SS][Z]"` must be
    /// well formed but is otherwise ignored, so `"1992-08-15T00:00:00Z"` works.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let date = match s.split_once('T') {
            Some((date, clock)) => {
                clock.strip_suffix('Z').unwrap_or(clock).parse::<TimeOfDay>()?;
                date
            }
            None => s,
        };
        let fields = digit_fields(date, &[4, 2, 2], "YYYY-MM-DD")?;
        Self::new(
            parse_field(fields[0], "year")?,
            parse_field(fields[1], "month")?,
            parse_field(fields[2], "day")?,
        )
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CalendarError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(d: CalendarDate) -> Self {
        d.to_string()
    }
}

/// Split on `-` into ASCII-digit fields of exactly the given widths.
fn digit_fields<'a>(
    s: &'a str,
    widths: &[usize],
    layout: &str,
) -> Result<Vec<&'a str>, CalendarError> {
    let fields: Vec<&str> = s.split('-').collect();
    let well_formed = fields.len() == widths.len()
        && fields
            .iter()
            .zip(widths)
            .all(|(f, &w)| f.len() == w && f.bytes().all(|b| b.is_ascii_digit()));
    if !well_formed {
        return Err(CalendarError::Parse(format!("expected {layout}, got '{s}'")));
    }
    Ok(fields)
}

fn parse_field<T>(s: &str, what: &str) -> Result<T, CalendarError>
where
    T: FromStr,
    T::Err: Display,
{
    s.parse()
        .map_err(|e| CalendarError::Parse(format!("{what} '{s}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2100, 2).unwrap(), 28);
    }

    #[test]
    fn month_out_of_range() {
        assert_eq!(days_in_month(2024, 0), Err(CalendarError::InvalidMonth(0)));
        assert_eq!(days_in_month(2024, 13), Err(CalendarError::InvalidMonth(13)));
    }

    #[test]
    fn april_31_rejected() {
        let err = CalendarDate::new(2024, 4, 31).unwrap_err();
        assert!(err.is_invalid_date());
        assert!(MonthDay::new(4, 31).is_err());
    }

    #[test]
    fn feb_29_depends_on_year() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        assert!(MonthDay::new(2, 29).is_ok());
    }

    #[test]
    fn checked_matches_new() {
        for month in 0..=13 {
            for day in 0..=32 {
                assert_eq!(MonthDay::checked(month, day), MonthDay::new(month, day).ok());
            }
        }
    }

    #[test]
    fn year_bounds() {
        assert_eq!(
            CalendarDate::new(0, 1, 1),
            Err(CalendarError::YearOutOfRange(0))
        );
        assert_eq!(
            CalendarDate::new(10_000, 1, 1),
            Err(CalendarError::YearOutOfRange(10_000))
        );
        assert!(CalendarDate::new(9999, 12, 31).is_ok());
    }

    #[test]
    fn parse_plain_and_iso() {
        let d: CalendarDate = "1992-08-15".parse().unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1992, 8, 15));
        let d: CalendarDate = "1992-08-15T10:30:00Z".parse().unwrap();
        assert_eq!(d.to_string(), "1992-08-15");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "1992/08/15".parse::<CalendarDate>(),
            Err(CalendarError::Parse(_))
        ));
        assert!(matches!(
            "1992-xx-15".parse::<CalendarDate>(),
            Err(CalendarError::Parse(_))
        ));
    }

    #[test]
    fn month_day_parse_display() {
        let md: MonthDay = "08-15".parse().unwrap();
        assert_eq!(md.to_string(), "08-15");
        assert!("8".parse::<MonthDay>().is_err());
    }

    #[test]
    fn leap_ordinal_landmarks() {
        assert_eq!(MonthDay::new(1, 1).unwrap().leap_ordinal(), 1);
        assert_eq!(MonthDay::new(2, 29).unwrap().leap_ordinal(), 60);
        assert_eq!(MonthDay::new(3, 1).unwrap().leap_ordinal(), 61);
        assert_eq!(MonthDay::new(12, 31).unwrap().leap_ordinal(), 366);
    }

    #[test]
    fn ordinal_round_trip_all_days() {
        for ord in 1..=366 {
            assert_eq!(MonthDay::from_leap_ordinal(ord).leap_ordinal(), ord);
        }
    }

    #[test]
    fn succ_pred_wrap() {
        let dec31 = MonthDay::new(12, 31).unwrap();
        let jan1 = MonthDay::new(1, 1).unwrap();
        assert_eq!(dec31.succ(), jan1);
        assert_eq!(jan1.pred(), dec31);
        assert_eq!(MonthDay::new(2, 28).unwrap().succ(), MonthDay::new(2, 29).unwrap());
    }

    #[test]
    fn month_dates_count() {
        assert_eq!(CalendarDate::month_dates(2026, 3).unwrap().len(), 31);
        assert_eq!(CalendarDate::month_dates(2026, 2).unwrap().len(), 28);
        assert!(CalendarDate::month_dates(2026, 13).is_err());
    }

    #[test]
    fn parse_rejects_loose_fields() {
        for s in ["+1992-+8-+15", "+1992-08-15", "1992-8-15", "92-08-15", "1992-08-15-01"] {
            assert!(
                matches!(s.parse::<CalendarDate>(), Err(CalendarError::Parse(_))),
                "{s}"
            );
        }
        for s in ["+08-+15", "8-15", "08-5", "08/15", "-08-15"] {
            assert!(
                matches!(s.parse::<MonthDay>(), Err(CalendarError::Parse(_))),
                "{s}"
            );
        }
    }

    #[test]
    fn parse_checks_iso_time_part() {
        assert!("1992-08-15T10:30".parse::<CalendarDate>().is_ok());
        assert!("1992-08-15T10:30:00".parse::<CalendarDate>().is_ok());
        for s in [
            "1992-08-15Tgarbage",
            "1992-08-15T",
            "1992-08-15T10:30:99Z",
            "1992-08-15T25:00Z",
            "1992-08-15T10:30+05:30",
        ] {
            assert!(s.parse::<CalendarDate>().is_err(), "{s}");
        }
    }

    #[test]
    fn parse_impossible_day_is_invalid_date() {
        let err = "2023-02-29".parse::<CalendarDate>().unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidDay {
                year: Some(2023),
                month: 2,
                day: 29
            }
        );
        assert_eq!(
            "2023-13-01".parse::<CalendarDate>(),
            Err(CalendarError::InvalidMonth(13))
        );
        assert_eq!(
            "0000-01-01".parse::<CalendarDate>(),
            Err(CalendarError::YearOutOfRange(0))
        );
    }

    #[test]
    fn chrono_interop() {
        let nd = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let d = CalendarDate::try_from(nd).unwrap();
        assert_eq!(d.to_naive_date(), Some(nd));
    }
}
