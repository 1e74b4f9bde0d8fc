//! Convenience wrapper for the jyoti calculation crates.
//!
//! Accepts birth data the way a profile form submits it (ISO date strings,
//! `HH:MM` times, free-text location) and returns serializable readings.
//! The caller always supplies "today"; nothing here reads a clock.
//!
//! # Quick start
//!
//! ```rust
//! use jyoti_rs::*;
//!
//! let birth = BirthMoment::parse("1992-08-15", Some("06:30"), "Pune").unwrap();
//! let today: CalendarDate = "2026-03-09".parse().unwrap();
//! let reading = ProfileReading::compute(&birth, today);
//! assert_eq!(reading.sun_signs.tropical, ZodiacSign::Leo);
//! assert_eq!(reading.numerology_numbers.life_path, 8);
//! ```

pub mod convenience;
pub mod error;
pub mod profile;

// Primary re-exports; callers should only need `use jyoti_rs::*`
pub use convenience::{
    life_path, monthly_vibrations, numerology, parse_birth_month_day, reading, sun_signs,
};
pub use error::JyotiError;
pub use profile::{BirthMoment, NumerologyNumbers, ProfileReading, SunSigns};

// Re-export calculation types so callers don't need the lower crates directly.
pub use jyoti_base::{
    DayVibration, Element, LifePathBreakdown, Modality, ZodiacSign, ZodiacSystem, personal_day,
    personal_month, personal_month_of, personal_year, sidereal_sign, sign_for, tropical_sign,
};
pub use jyoti_time::{CalendarDate, CalendarError, MonthDay, TimeOfDay};
