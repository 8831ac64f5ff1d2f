//! Character level, its classification bands, and inclusive level ranges

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, ValidationKind};

/// A validated character level in `[1, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct CharacterLevel(u8);

impl CharacterLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Levels below this are novices
    pub const EXPERIENCED_THRESHOLD: u8 = 20;
    /// Levels at or above this are masters
    pub const MASTER_THRESHOLD: u8 = 90;

    /// Create a new validated level.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` with kind `InvalidLevel` if the value is
    /// outside `[1, 100]`.
    pub fn new(value: impl Into<i64>) -> Result<Self, DomainError> {
        let value = value.into();
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(DomainError::validation(
                ValidationKind::InvalidLevel,
                format!(
                    "Level must be between {} and {}, got {}",
                    Self::MIN,
                    Self::MAX,
                    value
                ),
            ));
        }
        // Range checked above
        Ok(Self(value as u8))
    }

    /// The lowest possible level.
    pub fn min() -> Self {
        Self(Self::MIN)
    }

    /// The level cap.
    pub fn max() -> Self {
        Self(Self::MAX)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn classify(&self) -> LevelBand {
        match self.0 {
            l if l >= Self::MASTER_THRESHOLD => LevelBand::Master,
            l if l >= Self::EXPERIENCED_THRESHOLD => LevelBand::Experienced,
            _ => LevelBand::Novice,
        }
    }

    pub fn greater_than(&self, other: &CharacterLevel) -> bool {
        self.0 > other.0
    }

    pub fn equals(&self, other: &CharacterLevel) -> bool {
        self.0 == other.0
    }

    /// Absolute distance between two levels, never negative.
    pub fn difference_from(&self, other: &CharacterLevel) -> u8 {
        self.0.abs_diff(other.0)
    }

    pub fn is_max(&self) -> bool {
        self.0 == Self::MAX
    }

    /// The following level, or `None` at the cap.
    pub fn next(&self) -> Option<CharacterLevel> {
        if self.is_max() {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }
}

impl fmt::Display for CharacterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for CharacterLevel {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CharacterLevel> for u8 {
    fn from(level: CharacterLevel) -> u8 {
        level.0
    }
}

// ============================================================================
// LevelBand
// ============================================================================

/// Fixed classification of levels: novice < 20 <= experienced < 90 <= master
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelBand {
    Novice,
    Experienced,
    Master,
}

impl LevelBand {
    pub fn all() -> &'static [LevelBand] {
        &[LevelBand::Novice, LevelBand::Experienced, LevelBand::Master]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LevelBand::Novice => "novice",
            LevelBand::Experienced => "experienced",
            LevelBand::Master => "master",
        }
    }
}

impl fmt::Display for LevelBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// LevelRange
// ============================================================================

/// An inclusive range of levels with `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRange {
    min: CharacterLevel,
    max: CharacterLevel,
}

impl LevelRange {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` with kind `InvalidLevelRange` if `min > max`.
    pub fn new(min: CharacterLevel, max: CharacterLevel) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::validation(
                ValidationKind::InvalidLevelRange,
                format!("Minimum level {} is greater than maximum level {}", min, max),
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> CharacterLevel {
        self.min
    }

    pub fn max(&self) -> CharacterLevel {
        self.max
    }

    pub fn contains(&self, level: CharacterLevel) -> bool {
        level >= self.min && level <= self.max
    }
}

impl fmt::Display for LevelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
