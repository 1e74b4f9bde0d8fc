//! Birth profile input and the combined reading handed back to callers.
//!
//! Field names serialize in camelCase (`birthDate`, `sunSigns`,
//! `numerologyNumbers.lifePath`) so a reading can be merged straight into
//! the JSON document a web handler returns.

use jyoti_base::{
    ZodiacSign, ZodiacSystem, life_path, personal_day, personal_month_of, personal_year,
};
use jyoti_time::{CalendarDate, TimeOfDay};
use serde::{Deserialize, Serialize};

use crate::error::JyotiError;

/// Raw birth data for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthMoment {
    #[serde(rename = "birthDate")]
    pub date: CalendarDate,
    #[serde(rename = "birthTime", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeOfDay>,
    /// Free text, passed through untouched. No calculation reads it.
    #[serde(rename = "birthLocation", default)]
    pub location: String,
}

impl BirthMoment {
    pub fn new(date: CalendarDate, time: Option<TimeOfDay>, location: impl Into<String>) -> Self {
        Self {
            date,
            time,
            location: location.into(),
        }
    }

    /// Build from the strings a profile form submits.
    ///
    /// An empty `time` string is treated as "unknown".
    pub fn parse(date: &str, time: Option<&str>, location: &str) -> Result<Self, JyotiError> {
        let date: CalendarDate = date.parse()?;
        let time = match time.map(str::trim) {
            None | Some("") => None,
            Some(t) => Some(t.parse::<TimeOfDay>()?),
        };
        Ok(Self::new(date, time, location.trim()))
    }
}

/// Sun sign in both zodiac systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunSigns {
    pub tropical: ZodiacSign,
    pub sidereal: ZodiacSign,
}

impl SunSigns {
    pub fn for_date(date: &CalendarDate) -> Self {
        let md = date.month_day();
        Self {
            tropical: ZodiacSystem::Tropical.table().sign_at(md),
            sidereal: ZodiacSystem::Sidereal.table().sign_at(md),
        }
    }

    pub fn get(&self, system: ZodiacSystem) -> ZodiacSign {
        match system {
            ZodiacSystem::Tropical => self.tropical,
            ZodiacSystem::Sidereal => self.sidereal,
        }
    }
}

/// Numerology numbers of a birth date relative to a target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyNumbers {
    pub life_path: u32,
    pub personal_year: u32,
    pub personal_month: u32,
    pub personal_day: u32,
    /// The date the personal numbers were computed for.
    pub target_date: CalendarDate,
}

impl NumerologyNumbers {
    pub fn compute(birth: &CalendarDate, target: &CalendarDate) -> Self {
        let md = birth.month_day();
        Self {
            life_path: life_path(birth),
            personal_year: personal_year(md, target.year()),
            personal_month: personal_month_of(md, target),
            personal_day: personal_day(md, target),
            target_date: *target,
        }
    }
}

/// Everything this library derives from one birth profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReading {
    #[serde(flatten)]
    pub birth: BirthMoment,
    pub sun_signs: SunSigns,
    pub numerology_numbers: NumerologyNumbers,
}

impl ProfileReading {
    /// Compute a reading; `today` anchors the personal cycle numbers.
    pub fn compute(birth: &BirthMoment, today: CalendarDate) -> Self {
        let sun_signs = SunSigns::for_date(&birth.date);
        let numerology_numbers = NumerologyNumbers::compute(&birth.date, &today);
        tracing::debug!(
            birth_date = %birth.date,
            target_date = %today,
            tropical = %sun_signs.tropical,
            sidereal = %sun_signs.sidereal,
            life_path = numerology_numbers.life_path,
            personal_year = numerology_numbers.personal_year,
            "computed profile reading"
        );
        Self {
            birth: birth.clone(),
            sun_signs,
            numerology_numbers,
        }
    }

    pub fn to_json(&self) -> Result<String, JyotiError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_value(&self) -> Result<serde_json::Value, JyotiError> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BirthMoment {
        BirthMoment::parse("1992-08-15", Some("06:30"), "Pune, India").unwrap()
    }

    #[test]
    fn parse_birth_moment() {
        let b = sample();
        assert_eq!(b.date.to_string(), "1992-08-15");
        assert_eq!(b.time.map(|t| t.hour()), Some(6));
        assert_eq!(b.location, "Pune, India");
    }

    #[test]
    fn empty_time_is_unknown() {
        let b = BirthMoment::parse("1992-08-15", Some("  "), "").unwrap();
        assert!(b.time.is_none());
    }

    #[test]
    fn bad_time_is_an_error() {
        assert!(matches!(
            BirthMoment::parse("1992-08-15", Some("25:00"), ""),
            Err(JyotiError::Calendar(_))
        ));
    }

    #[test]
    fn sun_signs_for_sample() {
        let s = SunSigns::for_date(&sample().date);
        assert_eq!(s.tropical, ZodiacSign::Leo);
        assert_eq!(s.sidereal, ZodiacSign::Cancer);
        assert_eq!(s.get(ZodiacSystem::Sidereal), ZodiacSign::Cancer);
    }

    #[test]
    fn reading_numbers() {
        let today = CalendarDate::new(2026, 3, 9).unwrap();
        let r = ProfileReading::compute(&sample(), today);
        assert_eq!(r.numerology_numbers.life_path, 8);
        assert_eq!(r.numerology_numbers.personal_year, 6);
        assert_eq!(r.numerology_numbers.personal_month, 9);
        assert_eq!(r.numerology_numbers.personal_day, 9);
    }

    #[test]
    fn reading_json_shape() {
        let today = CalendarDate::new(2026, 3, 9).unwrap();
        let v = ProfileReading::compute(&sample(), today).to_value().unwrap();
        assert_eq!(v["birthDate"], "1992-08-15");
        assert_eq!(v["birthTime"], "06:30");
        assert_eq!(v["birthLocation"], "Pune, India");
        assert_eq!(v["sunSigns"]["tropical"], "Leo");
        assert_eq!(v["sunSigns"]["sidereal"], "Cancer");
        assert_eq!(v["numerologyNumbers"]["lifePath"], 8);
        assert_eq!(v["numerologyNumbers"]["targetDate"], "2026-03-09");
    }

    #[test]
    fn reading_round_trips_through_json() {
        let today = CalendarDate::new(2026, 10, 16).unwrap();
        let r = ProfileReading::compute(&sample(), today);
        let back: ProfileReading = serde_json::from_str(&r.to_json().unwrap()).unwrap();
        assert_eq!(back, r);
    }
}
