//! Personal Year, Month and Day numbers.
//!
//! These combine the fixed birth month/day with a caller-chosen target date.
//! Every step uses [`reduce_digits`], so results are always 1..=9 and master
//! numbers never appear.
//!
//! Composition:
//! - year  = reduce(reduce(birth month) + reduce(birth day) + reduce(target year))
//! - month = reduce(year + reduce(target month))
//! - day   = reduce(year + reduce(target month) + reduce(target day))
//!
//! Birth 08-15, target 2026-03-09: year = reduce(8 + 6 + 1) = 6,
//! day = reduce(6 + 3 + 9) = 9.

use jyoti_time::{CalendarDate, CalendarError, MonthDay, max_days_in_month};
use serde::{Deserialize, Serialize};

use crate::numerology::reduce_digits;

/// Length of the personal-year cycle.
pub const PERSONAL_CYCLE_YEARS: i32 = 9;

/// Personal Year number of `target_year` for someone born on `birth`.
///
/// Only the digits of `target_year` matter, so any year is accepted and a
/// negative year reduces like its absolute value.
pub fn personal_year(birth: MonthDay, target_year: i32) -> u32 {
    reduce_digits(
        reduce_digits(birth.month())
            + reduce_digits(birth.day())
            + reduce_digits(target_year.unsigned_abs()),
    )
}

fn month_number(personal_year: u32, month: u32) -> u32 {
    reduce_digits(personal_year + reduce_digits(month))
}

/// Personal Month number of `target_month` in `target_year`.
///
/// Returns [`CalendarError::InvalidMonth`] unless `target_month` is 1..=12.
pub fn personal_month(
    birth: MonthDay,
    target_year: i32,
    target_month: u32,
) -> Result<u32, CalendarError> {
    max_days_in_month(target_month)?;
    Ok(month_number(personal_year(birth, target_year), target_month))
}

/// Personal Month number of the month containing `target`.
pub fn personal_month_of(birth: MonthDay, target: &CalendarDate) -> u32 {
    month_number(personal_year(birth, target.year()), target.month())
}

/// Personal Day number of `target`.
pub fn personal_day(birth: MonthDay, target: &CalendarDate) -> u32 {
    let year = personal_year(birth, target.year());
    reduce_digits(year + reduce_digits(target.month()) + reduce_digits(target.day()))
}

/// One cell of a monthly vibration grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayVibration {
    pub date: CalendarDate,
    pub personal_day: u32,
}

/// Personal Day number for every day of `month` in `year`.
pub fn personal_days_in_month(
    birth: MonthDay,
    year: i32,
    month: u32,
) -> Result<Vec<DayVibration>, CalendarError> {
    let dates = CalendarDate::month_dates(year, month)?;
    Ok(dates
        .into_iter()
        .map(|date| DayVibration {
            date,
            personal_day: personal_day(birth, &date),
        })
        .collect())
}
