//! Hazard values: ratings 0–4, the special-hazard set, and the placard they form.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidInput;

/// The three numerically rated hazard classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HazardField {
    Health,
    Flammability,
    Reactivity,
}

impl fmt::Display for HazardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HazardField::Health => "Health",
            HazardField::Flammability => "Flammability",
            HazardField::Reactivity => "Reactivity",
        };
        f.write_str(name)
    }
}

/// A rating in `0..=4`. Only constructible through [`HazardRating::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HazardRating(u8);

impl HazardRating {
    pub const MAX: u8 = 4;

    pub fn new(field: HazardField, value: i64) -> Result<Self, InvalidInput> {
        if (0..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidInput::OutOfRange { field, value })
        }
    }
}

impl fmt::Display for HazardRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Special hazards that have an icon in the bottom quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialHazard {
    Acid,
    Alkaline,
    Corrosive,
    Oxidizer,
    Radioactive,
    UseNoWater,
}

impl SpecialHazard {
    pub const ALL: [SpecialHazard; 6] = [
        SpecialHazard::Acid,
        SpecialHazard::Alkaline,
        SpecialHazard::Corrosive,
        SpecialHazard::Oxidizer,
        SpecialHazard::Radioactive,
        SpecialHazard::UseNoWater,
    ];

    /// Short code users type and the text fallback draws.
    pub fn code(self) -> &'static str {
        match self {
            SpecialHazard::Acid => "ACID",
            SpecialHazard::Alkaline => "ALK",
            SpecialHazard::Corrosive => "COR",
            SpecialHazard::Oxidizer => "OX",
            SpecialHazard::Radioactive => "RADIO",
            SpecialHazard::UseNoWater => "W",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SpecialHazard::Acid => "Acid",
            SpecialHazard::Alkaline => "Alkaline",
            SpecialHazard::Corrosive => "Corrosive",
            SpecialHazard::Oxidizer => "Oxidizer",
            SpecialHazard::Radioactive => "Radioactive",
            SpecialHazard::UseNoWater => "Use No Water",
        }
    }

    /// Icon file name inside the icon directory.
    pub fn icon_file(self) -> &'static str {
        match self {
            SpecialHazard::Acid => "acid.png",
            SpecialHazard::Alkaline => "alk.png",
            SpecialHazard::Corrosive => "cor.png",
            SpecialHazard::Oxidizer => "oxy.png",
            SpecialHazard::Radioactive => "radio.png",
            SpecialHazard::UseNoWater => "usenowater.png",
        }
    }
}

impl fmt::Display for SpecialHazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SpecialHazard {
    type Err = InvalidInput;

    /// Matches the code exactly, ignoring case and surrounding whitespace (`ox`, ` W `).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        SpecialHazard::ALL
            .into_iter()
            .find(|h| h.code() == wanted)
            .ok_or_else(|| InvalidInput::UnknownSpecial(s.trim().to_string()))
    }
}

/// What goes in the bottom quadrant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpecialMarking {
    #[default]
    None,
    Hazard(SpecialHazard),
    /// Unrecognized code, drawn as upper-cased text.
    FreeText(String),
}

impl SpecialMarking {
    /// Lenient parse: empty → None, known code → Hazard, anything else → FreeText.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return SpecialMarking::None;
        }
        match trimmed.parse::<SpecialHazard>() {
            Ok(hazard) => SpecialMarking::Hazard(hazard),
            Err(_) => SpecialMarking::FreeText(trimmed.to_uppercase()),
        }
    }

    /// Like [`SpecialMarking::parse`] but rejects unrecognized codes.
    pub fn parse_strict(raw: &str) -> Result<Self, InvalidInput> {
        match Self::parse(raw) {
            SpecialMarking::FreeText(_) => Err(InvalidInput::UnknownSpecial(raw.trim().to_string())),
            marking => Ok(marking),
        }
    }

    /// Text drawn when no icon is composited; `None` draws nothing.
    pub fn text(&self) -> Option<&str> {
        match self {
            SpecialMarking::None => None,
            SpecialMarking::Hazard(h) => Some(h.code()),
            SpecialMarking::FreeText(t) => Some(t),
        }
    }
}

impl fmt::Display for SpecialMarking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialMarking::None => f.write_str("None"),
            SpecialMarking::Hazard(h) => write!(f, "{} ({})", h.display_name(), h.code()),
            SpecialMarking::FreeText(t) => f.write_str(t),
        }
    }
}

/// Everything drawn on one diamond.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placard {
    pub health: HazardRating,
    pub flammability: HazardRating,
    pub reactivity: HazardRating,
    pub special: SpecialMarking,
}

impl Placard {
    /// Validates raw values in field order (health, flammability, reactivity) and parses the
    /// special leniently.
    pub fn from_raw(
        health: i64,
        flammability: i64,
        reactivity: i64,
        special: &str,
    ) -> Result<Self, InvalidInput> {
        Ok(Self {
            health: HazardRating::new(HazardField::Health, health)?,
            flammability: HazardRating::new(HazardField::Flammability, flammability)?,
            reactivity: HazardRating::new(HazardField::Reactivity, reactivity)?,
            special: SpecialMarking::parse(special),
        })
    }

    /// Like [`Placard::from_raw`] but rejects unrecognized special codes. Ratings are checked first.
    pub fn from_raw_strict(
        health: i64,
        flammability: i64,
        reactivity: i64,
        special: &str,
    ) -> Result<Self, InvalidInput> {
        let lenient = Self::from_raw(health, flammability, reactivity, "")?;
        Ok(Self {
            special: SpecialMarking::parse_strict(special)?,
            ..lenient
        })
    }
}
