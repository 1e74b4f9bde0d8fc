//! Digit-sum reductions and the Life Path number.
//!
//! Two reductions are used and must not be mixed up:
//! - [`reduce_digits`] folds all the way to a single digit.
//! - [`reduce_with_masters`] stops early on 11, 22 or 33.
//!
//! The Life Path number uses the master-number reduction at every step.
//! The cyclical numbers in [`crate::personal`] use the plain one.

use jyoti_time::CalendarDate;
use serde::{Deserialize, Serialize};

/// Digit sums that are kept intact by [`reduce_with_masters`].
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Every value [`life_path`] can return.
pub const LIFE_PATH_VALUES: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];

/// Sum of the decimal digits of `n`.
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

pub const fn is_master_number(n: u32) -> bool {
    matches!(n, 11 | 22 | 33)
}

/// Repeated digit sum down to a single digit, no exceptions.
///
/// `reduce_digits(0) == 0`; every positive input lands in 1..=9.
pub const fn reduce_digits(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Repeated digit sum that stops at a single digit or a master number.
pub const fn reduce_with_masters(mut n: u32) -> u32 {
    while n > 9 && !is_master_number(n) {
        n = digit_sum(n);
    }
    n
}

/// Intermediate values of a Life Path calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifePathBreakdown {
    /// Day of month after reduction.
    pub day: u32,
    /// Month after reduction.
    pub month: u32,
    /// Year after reduction.
    pub year: u32,
    /// `day + month + year`, before the final reduction.
    pub sum: u32,
    /// The Life Path number.
    pub life_path: u32,
}

impl LifePathBreakdown {
    /// True when the final number is 11, 22 or 33.
    pub fn is_master(&self) -> bool {
        is_master_number(self.life_path)
    }
}

/// Life Path with every intermediate step.
///
/// Day, month and year are reduced on their own (keeping master numbers),
/// summed, and the sum is reduced again (keeping master numbers).
pub fn life_path_breakdown(date: &CalendarDate) -> LifePathBreakdown {
    let day = reduce_with_masters(date.day());
    let month = reduce_with_masters(date.month());
    // CalendarDate guarantees a year in 1..=9999.
    let year = reduce_with_masters(date.year().unsigned_abs());
    let sum = day + month + year;
    LifePathBreakdown {
        day,
        month,
        year,
        sum,
        life_path: reduce_with_masters(sum),
    }
}

/// Life Path number of a birth date: one of 1..=9, 11, 22, 33.
pub fn life_path(date: &CalendarDate) -> u32 {
    life_path_breakdown(date).life_path
}
