//! Command implementations. Each returns a [`Rendered`] so `main` only
//! decides between text and JSON output.

use std::fmt::Write as _;

use jyoti_rs::{
    BirthMoment, CalendarDate, ProfileReading, ZodiacSystem, monthly_vibrations,
    parse_birth_month_day, personal_day, personal_year, sign_for,
};
use serde_json::json;

use crate::config::{OutputFormat, SystemChoice};
use crate::error::Result;

/// A command result in both output shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub text: String,
    pub json: serde_json::Value,
}

impl Rendered {
    pub fn render(&self, format: OutputFormat, pretty: bool) -> Result<String> {
        Ok(match format {
            OutputFormat::Text => self.text.clone(),
            OutputFormat::Json if pretty => serde_json::to_string_pretty(&self.json)?,
            OutputFormat::Json => serde_json::to_string(&self.json)?,
        })
    }
}

/// Sun sign(s) for a `MM-DD` or `YYYY-MM-DD` date.
pub fn sign(input: &str, choice: SystemChoice) -> Result<Rendered> {
    let md = parse_birth_month_day(input)?;
    let mut text = String::new();
    let mut signs = serde_json::Map::new();
    for &system in choice.systems() {
        let sign = sign_for(system, md.month(), md.day())?;
        let (first, last) = system.table().range(sign);
        let _ = writeln!(
            text,
            "{:<9} {} ({}) - {:?}, {:?} [{first} .. {last}]",
            system.name(),
            sign.name(),
            sign.sanskrit_name(),
            sign.element(),
            sign.modality(),
        );
        signs.insert(system.name().to_string(), json!(sign));
    }
    tracing::debug!(date = %md, ?choice, "resolved sun signs");
    Ok(Rendered {
        text: text.trim_end().to_string(),
        json: serde_json::Value::Object(signs),
    })
}

/// Life Path number, optionally with reduced components.
pub fn life_path(date: &str, breakdown: bool) -> Result<Rendered> {
    let b = jyoti_rs::life_path(date)?;
    let text = if breakdown {
        format!(
            "day {} + month {} + year {} = {} -> Life Path {}",
            b.day, b.month, b.year, b.sum, b.life_path
        )
    } else {
        b.life_path.to_string()
    };
    let json = if breakdown {
        serde_json::to_value(b)?
    } else {
        json!({ "lifePath": b.life_path })
    };
    Ok(Rendered { text, json })
}

/// Personal Year number of `year`.
pub fn personal_year_cmd(birth: &str, year: i32) -> Result<Rendered> {
    let md = parse_birth_month_day(birth)?;
    let n = personal_year(md, year);
    Ok(Rendered {
        text: n.to_string(),
        json: json!({ "birth": md, "year": year, "personalYear": n }),
    })
}

/// Personal Day number of `target`.
pub fn personal_day_cmd(birth: &str, target: CalendarDate) -> Result<Rendered> {
    let md = parse_birth_month_day(birth)?;
    let n = personal_day(md, &target);
    Ok(Rendered {
        text: n.to_string(),
        json: json!({ "birth": md, "date": target, "personalDay": n }),
    })
}

/// Personal Day grid for one month.
pub fn month(birth: &str, year: i32, month: u32) -> Result<Rendered> {
    let grid = monthly_vibrations(birth, year, month)?;
    let mut text = String::new();
    for cell in &grid {
        let _ = writeln!(text, "{}  {}", cell.date, cell.personal_day);
    }
    Ok(Rendered {
        text: text.trim_end().to_string(),
        json: serde_json::to_value(&grid)?,
    })
}

/// Full profile reading.
pub fn profile(birth: &BirthMoment, today: CalendarDate) -> Result<Rendered> {
    let r = ProfileReading::compute(birth, today);
    let n = &r.numerology_numbers;
    let mut text = String::new();
    let _ = writeln!(text, "Birth:           {}", birth.date);
    if let Some(t) = birth.time {
        let _ = writeln!(text, "Time:            {t}");
    }
    if !birth.location.is_empty() {
        let _ = writeln!(text, "Location:        {}", birth.location);
    }
    for system in [ZodiacSystem::Tropical, ZodiacSystem::Sidereal] {
        let sign = r.sun_signs.get(system);
        let _ = writeln!(
            text,
            "Sun ({:<8}):  {} ({})",
            system.name(),
            sign.name(),
            sign.sanskrit_name()
        );
    }
    let _ = writeln!(text, "Life Path:       {}", n.life_path);
    let _ = writeln!(
        text,
        "Personal ({}): year {}, month {}, day {}",
        n.target_date, n.personal_year, n.personal_month, n.personal_day
    );
    Ok(Rendered {
        text: text.trim_end().to_string(),
        json: r.to_value()?,
    })
}
