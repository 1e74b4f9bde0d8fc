use jyoti_base::{DayVibration, LifePathBreakdown, life_path_breakdown, personal_days_in_month};
use jyoti_time::{CalendarDate, MonthDay};

use crate::error::JyotiError;
use crate::profile::{BirthMoment, NumerologyNumbers, ProfileReading, SunSigns};

/// Tropical and sidereal sun signs for a `"YYYY-MM-DD"` birth date.
pub fn sun_signs(birth_date: &str) -> Result<SunSigns, JyotiError> {
    let date: CalendarDate = birth_date.parse()?;
    Ok(SunSigns::for_date(&date))
}

/// Life Path with its reduced components for a `"YYYY-MM-DD"` birth date.
pub fn life_path(birth_date: &str) -> Result<LifePathBreakdown, JyotiError> {
    let date: CalendarDate = birth_date.parse()?;
    Ok(life_path_breakdown(&date))
}

/// Life Path and personal cycle numbers of `birth_date` as of `target_date`.
pub fn numerology(birth_date: &str, target_date: &str) -> Result<NumerologyNumbers, JyotiError> {
    let birth: CalendarDate = birth_date.parse()?;
    let target: CalendarDate = target_date.parse()?;
    Ok(NumerologyNumbers::compute(&birth, &target))
}

/// Personal Day grid for one month.
///
/// `birth` accepts either `"MM-DD"` or a full `"YYYY-MM-DD"` date.
pub fn monthly_vibrations(
    birth: &str,
    year: i32,
    month: u32,
) -> Result<Vec<DayVibration>, JyotiError> {
    let md = parse_birth_month_day(birth)?;
    Ok(personal_days_in_month(md, year, month)?)
}

/// Full reading from form strings.
pub fn reading(
    birth_date: &str,
    birth_time: Option<&str>,
    birth_location: &str,
    today: &str,
) -> Result<ProfileReading, JyotiError> {
    let birth = BirthMoment::parse(birth_date, birth_time, birth_location)?;
    let today: CalendarDate = today.parse()?;
    Ok(ProfileReading::compute(&birth, today))
}

/// Accept `"MM-DD"` or `"YYYY-MM-DD"` and keep only month and day.
pub fn parse_birth_month_day(s: &str) -> Result<MonthDay, JyotiError> {
    let s = s.trim();
    if s.matches('-').count() == 1 {
        Ok(s.parse::<MonthDay>()?)
    } else {
        Ok(s.parse::<CalendarDate>()?.month_day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyoti_base::ZodiacSign;

    #[test]
    fn signs_from_string() {
        let s = sun_signs("1992-08-15").unwrap();
        assert_eq!(s.tropical, ZodiacSign::Leo);
        assert!(sun_signs("1992-04-31").is_err());
    }

    #[test]
    fn life_path_from_string() {
        assert_eq!(life_path("1975-11-29").unwrap().life_path, 8);
    }

    #[test]
    fn numerology_from_strings() {
        let n = numerology("1992-08-15", "2026-03-09").unwrap();
        assert_eq!(n.personal_year, 6);
        assert_eq!(n.personal_day, 9);
    }

    #[test]
    fn birth_month_day_both_forms() {
        assert_eq!(
            parse_birth_month_day("08-15").unwrap(),
            parse_birth_month_day("1992-08-15").unwrap()
        );
        assert!(parse_birth_month_day("15").is_err());
    }

    #[test]
    fn vibrations_grid() {
        let grid = monthly_vibrations("08-15", 2026, 3).unwrap();
        assert_eq!(grid.len(), 31);
        assert_eq!(grid[8].personal_day, 9);
    }

    #[test]
    fn reading_from_strings() {
        let r = reading("1975-11-29", None, "", "2026-01-01").unwrap();
        assert_eq!(r.numerology_numbers.life_path, 8);
        assert!(r.birth.time.is_none());
    }
}
