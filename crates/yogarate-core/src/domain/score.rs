//! Star scores and the four rating dimensions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog::{ParseEnumError, normalize_name};

/// A score outside 1..=5, or text that is not a number at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("Score must be between {min} and {max}, got {0}", min = Score::MIN, max = Score::MAX)]
    OutOfRange(i64),

    #[error("Score is not a number: {0}")]
    NotANumber(String),
}

/// A 1-5 star score.
///
/// Construction is checked, so a `Score` in memory is always in range.
/// Deserializing an out-of-range number fails, which the store treats as a
/// corrupted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Pre-selected value on a fresh rating form.
    pub const DEFAULT: Self = Self(3);

    pub fn new(value: u8) -> Result<Self, ScoreError> {
        Self::try_from(i64::from(value))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Score {
    type Error = ScoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(ScoreError::OutOfRange(value)),
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl FromStr for Score {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ScoreError::NotANumber(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the four independent sub-scores of a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Intensity,
    Flow,
    Energy,
    Music,
}

impl Dimension {
    pub const ALL: [Self; 4] = [Self::Intensity, Self::Flow, Self::Energy, Self::Music];

    /// Field name as persisted inside `dimensions`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Intensity => "intensity",
            Self::Flow => "flow",
            Self::Energy => "energy",
            Self::Music => "music",
        }
    }

    /// Capitalized label for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Intensity => "Intensity",
            Self::Flow => "Flow",
            Self::Energy => "Energy",
            Self::Music => "Music",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| ParseEnumError::new("dimension", s))
    }
}

/// The four sub-scores recorded alongside the overall rating.
///
/// Intensity runs from gentle yoga (1) to a full workout (5). The others are
/// plain quality scores. None of them has to agree with the overall rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub intensity: Score,
    pub flow: Score,
    pub energy: Score,
    pub music: Score,
}

impl Dimensions {
    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> Score {
        match dimension {
            Dimension::Intensity => self.intensity,
            Dimension::Flow => self.flow,
            Dimension::Energy => self.energy,
            Dimension::Music => self.music,
        }
    }
}
