//! Fixed categorical attributes of a rating.
//!
//! Class types and studio locations are closed sets. They serialize as their
//! display names (`"Yoga 1"`, `"Capitol Hill"`) so the persisted JSON stays
//! human-readable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a name does not match any member of a fixed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Lowercase and drop separators so `"yoga-1"`, `"Yoga 1"` and `"yoga1"` compare equal.
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Category of class a rating was recorded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassType {
    Sculpt,
    #[serde(rename = "Yoga 1")]
    Yoga1,
    #[serde(rename = "Yoga 2")]
    Yoga2,
    #[serde(rename = "Yoga 3")]
    Yoga3,
    #[serde(rename = "Hot Power Fusion")]
    HotPowerFusion,
    Strength,
}

impl ClassType {
    /// Every class type, in selection order.
    pub const ALL: [Self; 6] = [
        Self::Sculpt,
        Self::Yoga1,
        Self::Yoga2,
        Self::Yoga3,
        Self::HotPowerFusion,
        Self::Strength,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sculpt => "Sculpt",
            Self::Yoga1 => "Yoga 1",
            Self::Yoga2 => "Yoga 2",
            Self::Yoga3 => "Yoga 3",
            Self::HotPowerFusion => "Hot Power Fusion",
            Self::Strength => "Strength",
        }
    }
}

impl Default for ClassType {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|c| normalize_name(c.as_str()) == wanted)
            .ok_or_else(|| ParseEnumError::new("class type", s))
    }
}

/// Studio where the class took place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StudioLocation {
    Ballard,
    Belltown,
    #[serde(rename = "Capitol Hill")]
    CapitolHill,
    #[serde(rename = "Queen Anne")]
    QueenAnne,
    #[serde(rename = "University District")]
    UniversityDistrict,
    Bellevue,
}

impl StudioLocation {
    /// Every studio location, in selection order.
    pub const ALL: [Self; 6] = [
        Self::Ballard,
        Self::Belltown,
        Self::CapitolHill,
        Self::QueenAnne,
        Self::UniversityDistrict,
        Self::Bellevue,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ballard => "Ballard",
            Self::Belltown => "Belltown",
            Self::CapitolHill => "Capitol Hill",
            Self::QueenAnne => "Queen Anne",
            Self::UniversityDistrict => "University District",
            Self::Bellevue => "Bellevue",
        }
    }
}

impl Default for StudioLocation {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for StudioLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudioLocation {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|l| normalize_name(l.as_str()) == wanted)
            .ok_or_else(|| ParseEnumError::new("studio location", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_type_parses_loosely() {
        assert_eq!("Yoga 1".parse::<ClassType>().unwrap(), ClassType::Yoga1);
        assert_eq!("yoga-2".parse::<ClassType>().unwrap(), ClassType::Yoga2);
        assert_eq!(
            "hot power fusion".parse::<ClassType>().unwrap(),
            ClassType::HotPowerFusion
        );
        assert!("Pilates".parse::<ClassType>().is_err());
    }

    #[test]
    fn studio_location_parses_loosely() {
        assert_eq!(
            "capitol_hill".parse::<StudioLocation>().unwrap(),
            StudioLocation::CapitolHill
        );
        let err = "Fremont".parse::<StudioLocation>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown studio location: Fremont");
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&ClassType::HotPowerFusion).unwrap();
        assert_eq!(json, "\"Hot Power Fusion\"");
        let loc: StudioLocation = serde_json::from_str("\"University District\"").unwrap();
        assert_eq!(loc, StudioLocation::UniversityDistrict);
    }

    #[test]
    fn display_matches_serde_name_for_every_member() {
        for class in ClassType::ALL {
            let json = serde_json::to_string(&class).unwrap();
            assert_eq!(json, format!("\"{class}\""));
        }
        for location in StudioLocation::ALL {
            let json = serde_json::to_string(&location).unwrap();
            assert_eq!(json, format!("\"{location}\""));
        }
    }

    #[test]
    fn defaults_are_first_members() {
        assert_eq!(ClassType::default(), ClassType::Sculpt);
        assert_eq!(StudioLocation::default(), StudioLocation::Ballard);
    }
}
