//! The twelve zodiac signs and their fixed classical attributes.
//!
//! Signs are ordered from Aries, matching the Vedic rashi order
//! (Mesha = Aries ... Meena = Pisces), so one index serves both systems.

use serde::{Deserialize, Serialize};

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Classical element (triplicity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Classical modality (quadruplicity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Sanskrit rashi name used on sidereal charts.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Aries => "Mesha",
            Self::Taurus => "Vrishabha",
            Self::Gemini => "Mithuna",
            Self::Cancer => "Karka",
            Self::Leo => "Simha",
            Self::Virgo => "Kanya",
            Self::Libra => "Tula",
            Self::Scorpio => "Vrischika",
            Self::Sagittarius => "Dhanu",
            Self::Capricorn => "Makara",
            Self::Aquarius => "Kumbha",
            Self::Pisces => "Meena",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign at `index` modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    /// The sign that follows this one around the wheel.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The sign that precedes this one around the wheel.
    pub const fn previous(self) -> Self {
        Self::from_index(self.index() + 11)
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_signs_count() {
        assert_eq!(ALL_SIGNS.len(), 12);
    }

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(ZodiacSign::from_index(i as u8), *s);
        }
    }

    #[test]
    fn next_previous_wrap() {
        assert_eq!(ZodiacSign::Pisces.next(), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::Aries.previous(), ZodiacSign::Pisces);
        for s in ALL_SIGNS {
            assert_eq!(s.next().previous(), s);
        }
    }

    #[test]
    fn elements() {
        assert_eq!(ZodiacSign::Leo.element(), Element::Fire);
        assert_eq!(ZodiacSign::Capricorn.element(), Element::Earth);
        assert_eq!(ZodiacSign::Aquarius.element(), Element::Air);
        assert_eq!(ZodiacSign::Pisces.element(), Element::Water);
    }

    #[test]
    fn modalities() {
        assert_eq!(ZodiacSign::Cancer.modality(), Modality::Cardinal);
        assert_eq!(ZodiacSign::Scorpio.modality(), Modality::Fixed);
        assert_eq!(ZodiacSign::Sagittarius.modality(), Modality::Mutable);
    }

    #[test]
    fn each_element_has_three_signs() {
        for e in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
            assert_eq!(ALL_SIGNS.iter().filter(|s| s.element() == e).count(), 3);
        }
    }

    #[test]
    fn display_is_english_name() {
        assert_eq!(ZodiacSign::Sagittarius.to_string(), "Sagittarius");
    }
}
