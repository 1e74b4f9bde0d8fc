//! Integration tests for calendar validation, parsing and serde shape.

use jyoti_time::{CalendarDate, CalendarError, MonthDay, TimeOfDay, days_in_month};
use proptest::prelude::*;

#[test]
fn serde_uses_iso_strings() {
    let d = CalendarDate::new(1975, 11, 29).unwrap();
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, "\"1975-11-29\"");
    let back: CalendarDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);

    let t: TimeOfDay = serde_json::from_str("\"14:45\"").unwrap();
    assert_eq!(t.minutes_since_midnight(), 14 * 60 + 45);

    let md: MonthDay = serde_json::from_str("\"02-29\"").unwrap();
    assert_eq!(md.leap_ordinal(), 60);
}

#[test]
fn serde_rejects_impossible_dates() {
    assert!(serde_json::from_str::<CalendarDate>("\"2023-02-29\"").is_err());
    assert!(serde_json::from_str::<MonthDay>("\"04-31\"").is_err());
    assert!(serde_json::from_str::<TimeOfDay>("\"25:00\"").is_err());
}

#[test]
fn full_year_sweep_2024() {
    let mut count = 0;
    for month in 1..=12 {
        count += CalendarDate::month_dates(2024, month).unwrap().len();
    }
    assert_eq!(count, 366);
}

#[test]
fn error_variants_for_bad_components() {
    assert_eq!(
        CalendarDate::new(2000, 13, 1),
        Err(CalendarError::InvalidMonth(13))
    );
    assert_eq!(
        CalendarDate::new(2000, 6, 0),
        Err(CalendarError::InvalidDay {
            year: Some(2000),
            month: 6,
            day: 0
        })
    );
}

proptest! {
    #[test]
    fn constructed_dates_round_trip_through_strings(
        year in 1i32..=9999,
        month in 1u32..=12,
        day in 1u32..=31,
    ) {
        let len = days_in_month(year, month).unwrap();
        match CalendarDate::new(year, month, day) {
            Ok(d) => {
                prop_assert!(day <= len);
                let parsed: CalendarDate = d.to_string().parse().unwrap();
                prop_assert_eq!(parsed, d);
            }
            Err(e) => {
                prop_assert!(day > len);
                prop_assert!(e.is_invalid_date());
            }
        }
    }

    #[test]
    fn month_day_ordinal_is_monotonic(a in 1u32..=366, b in 1u32..=366) {
        let ma = MonthDay::from_leap_ordinal(a);
        let mb = MonthDay::from_leap_ordinal(b);
        prop_assert_eq!(a.cmp(&b), ma.cmp(&mb));
    }
}
