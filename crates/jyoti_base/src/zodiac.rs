//! Sun-sign resolution from a calendar month and day.
//!
//! Each system is a fixed table of twelve ingress dates, the first day the
//! Sun is counted in a sign. A sign owns every day from its own ingress up
//! to the day before the next sign's ingress, so the twelve ranges tile the
//! 366-day calendar with no gaps and no overlaps.
//!
//! The sidereal table approximates the Lahiri ayanamsha with a constant
//! offset of roughly 24 days against the tropical table. The real offset
//! grows by about one degree every 72 years; the table does not model that
//! drift and needs no ephemeris data.

use jyoti_time::{CalendarError, MonthDay};
use serde::{Deserialize, Serialize};

use crate::sign::{ALL_SIGNS, ZodiacSign};

/// Zodiac reference frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSystem {
    /// Seasonal zodiac anchored to the equinoxes.
    Tropical,
    /// Star-anchored zodiac, Lahiri fixed-offset approximation.
    Sidereal,
}

impl ZodiacSystem {
    /// The ingress table for this system.
    pub fn table(self) -> &'static ZodiacTable {
        match self {
            Self::Tropical => &TROPICAL,
            Self::Sidereal => &SIDEREAL,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Tropical => "tropical",
            Self::Sidereal => "sidereal",
        }
    }
}

/// Ingress dates for the 12 signs, indexed by [`ZodiacSign::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZodiacTable {
    ingress: [MonthDay; 12],
}

const fn md(month: u32, day: u32) -> MonthDay {
    match MonthDay::checked(month, day) {
        Some(v) => v,
        None => panic!("invalid ingress date in zodiac table"),
    }
}

/// Western seasonal table (Aries begins March 21).
pub const TROPICAL: ZodiacTable = ZodiacTable {
    ingress: [
        md(3, 21),  // Aries
        md(4, 20),  // Taurus
        md(5, 21),  // Gemini
        md(6, 21),  // Cancer
        md(7, 23),  // Leo
        md(8, 23),  // Virgo
        md(9, 23),  // Libra
        md(10, 23), // Scorpio
        md(11, 22), // Sagittarius
        md(12, 22), // Capricorn
        md(1, 20),  // Aquarius
        md(2, 19),  // Pisces
    ],
};

/// Vedic table, Lahiri fixed offset (Aries begins April 14).
pub const SIDEREAL: ZodiacTable = ZodiacTable {
    ingress: [
        md(4, 14),  // Aries
        md(5, 15),  // Taurus
        md(6, 15),  // Gemini
        md(7, 16),  // Cancer
        md(8, 17),  // Leo
        md(9, 17),  // Virgo
        md(10, 17), // Libra
        md(11, 16), // Scorpio
        md(12, 16), // Sagittarius
        md(1, 14),  // Capricorn
        md(2, 13),  // Aquarius
        md(3, 14),  // Pisces
    ],
};

impl ZodiacTable {
    /// First day of `sign`.
    pub fn ingress(&self, sign: ZodiacSign) -> MonthDay {
        self.ingress[sign.index() as usize]
    }

    /// Inclusive `(first, last)` days owned by `sign`. `last` may fall in the
    /// next calendar year (Capricorn runs Dec 22 - Jan 19 in the tropical table).
    pub fn range(&self, sign: ZodiacSign) -> (MonthDay, MonthDay) {
        (self.ingress(sign), self.ingress(sign.next()).pred())
    }

    /// Number of days `sign` owns in a 366-day year.
    pub fn span_days(&self, sign: ZodiacSign) -> u32 {
        let start = self.ingress(sign).leap_ordinal();
        let next = self.ingress(sign.next()).leap_ordinal();
        (next + 366 - start) % 366
    }

    /// Whether `date` falls inside the range of `sign`.
    pub fn contains(&self, sign: ZodiacSign, date: MonthDay) -> bool {
        let start = self.ingress(sign).leap_ordinal();
        let offset = (date.leap_ordinal() + 366 - start) % 366;
        offset < self.span_days(sign)
    }

    /// The sign owning `date`.
    ///
    /// Picks the latest ingress on or before `date`; dates before the first
    /// ingress of the calendar year belong to the sign that began last December.
    pub fn sign_at(&self, date: MonthDay) -> ZodiacSign {
        let ord = date.leap_ordinal();
        let mut on_or_before: Option<(u32, ZodiacSign)> = None;
        let mut latest = (0, ZodiacSign::Aries);
        for sign in ALL_SIGNS {
            let start = self.ingress(sign).leap_ordinal();
            if start > latest.0 {
                latest = (start, sign);
            }
            if start <= ord && on_or_before.is_none_or(|(best, _)| start > best) {
                on_or_before = Some((start, sign));
            }
        }
        on_or_before.unwrap_or(latest).1
    }
}

/// Tropical (Western) sun sign for `month`/`day`.
pub fn tropical_sign(month: u32, day: u32) -> Result<ZodiacSign, CalendarError> {
    sign_for(ZodiacSystem::Tropical, month, day)
}

/// Sidereal (Vedic, Lahiri fixed offset) sun sign for `month`/`day`.
pub fn sidereal_sign(month: u32, day: u32) -> Result<ZodiacSign, CalendarError> {
    sign_for(ZodiacSystem::Sidereal, month, day)
}

/// Sun sign for `month`/`day` in `system`.
///
/// Feb 29 is accepted. Impossible month/day pairs return an error.
pub fn sign_for(system: ZodiacSystem, month: u32, day: u32) -> Result<ZodiacSign, CalendarError> {
    let date = MonthDay::new(month, day)?;
    Ok(system.table().sign_at(date))
}
