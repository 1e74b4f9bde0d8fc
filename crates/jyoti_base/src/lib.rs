//! Deterministic sun-sign and numerology calculations over birth dates.
//!
//! This crate provides:
//! - Tropical and sidereal (Lahiri, fixed-offset) sun-sign tables
//! - Life Path numbers with master-number handling
//! - Personal Year, Month and Day cycle numbers
//!
//! Every function is pure: output depends only on the arguments, and any
//! "current" date is passed in by the caller.

pub mod numerology;
pub mod personal;
pub mod sign;
pub mod zodiac;

pub use jyoti_time::CalendarError;
pub use numerology::{
    LIFE_PATH_VALUES, LifePathBreakdown, MASTER_NUMBERS, digit_sum, is_master_number, life_path,
    life_path_breakdown, reduce_digits, reduce_with_masters,
};
pub use personal::{
    DayVibration, PERSONAL_CYCLE_YEARS, personal_day, personal_days_in_month, personal_month,
    personal_month_of, personal_year,
};
pub use sign::{ALL_SIGNS, Element, Modality, ZodiacSign};
pub use zodiac::{
    SIDEREAL, TROPICAL, ZodiacSystem, ZodiacTable, sidereal_sign, sign_for, tropical_sign,
};
