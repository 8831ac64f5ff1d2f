//! Character classes
//!
//! The set of classes is closed. Input is case-insensitive and accepts either the
//! canonical name or its English alias; output always uses the canonical casing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, ValidationKind};

/// How a class fights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Melee,
    Magical,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Melee => "melee",
            Capability::Magical => "magical",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A character class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CharacterClass {
    /// Warrior
    Guerreiro,
    /// Mage
    Mago,
    /// Archer
    Arqueiro,
    /// Paladin
    Paladino,
}

/// Highest combat power multiplier of any class
pub const MAX_POWER_FACTOR: u32 = 12;

impl CharacterClass {
    /// All classes, in canonical order
    pub fn all() -> &'static [CharacterClass] {
        &[
            CharacterClass::Guerreiro,
            CharacterClass::Mago,
            CharacterClass::Arqueiro,
            CharacterClass::Paladino,
        ]
    }

    /// Parse a class name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` with kind `InvalidClass` for unknown names.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        match name.trim().to_lowercase().as_str() {
            "guerreiro" | "warrior" => Ok(CharacterClass::Guerreiro),
            "mago" | "mage" => Ok(CharacterClass::Mago),
            "arqueiro" | "archer" => Ok(CharacterClass::Arqueiro),
            "paladino" | "paladin" => Ok(CharacterClass::Paladino),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidClass,
                format!(
                    "Unknown character class '{}', expected one of: {}",
                    name.trim(),
                    Self::all()
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            )),
        }
    }

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterClass::Guerreiro => "Guerreiro",
            CharacterClass::Mago => "Mago",
            CharacterClass::Arqueiro => "Arqueiro",
            CharacterClass::Paladino => "Paladino",
        }
    }

    /// English alias
    pub fn english_name(&self) -> &'static str {
        match self {
            CharacterClass::Guerreiro => "Warrior",
            CharacterClass::Mago => "Mage",
            CharacterClass::Arqueiro => "Archer",
            CharacterClass::Paladino => "Paladin",
        }
    }

    pub fn capability(&self) -> Capability {
        match self {
            CharacterClass::Guerreiro | CharacterClass::Paladino => Capability::Melee,
            CharacterClass::Mago | CharacterClass::Arqueiro => Capability::Magical,
        }
    }

    pub fn is_melee(&self) -> bool {
        self.capability() == Capability::Melee
    }

    pub fn abilities(&self) -> &'static [&'static str] {
        match self {
            CharacterClass::Guerreiro => &["Power Strike", "Shield Wall", "Battle Cry"],
            CharacterClass::Mago => &["Fireball", "Frost Nova", "Arcane Shield"],
            CharacterClass::Arqueiro => &["Precise Shot", "Volley", "Camouflage"],
            CharacterClass::Paladino => &["Holy Strike", "Lay on Hands", "Divine Aura"],
        }
    }

    /// Combat power gained per level. Never above [`MAX_POWER_FACTOR`].
    pub fn power_factor(&self) -> u32 {
        match self {
            CharacterClass::Guerreiro => 12,
            CharacterClass::Paladino => 11,
            CharacterClass::Mago => 10,
            CharacterClass::Arqueiro => 9,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CharacterClass {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CharacterClass> for String {
    fn from(class: CharacterClass) -> String {
        class.as_str().to_string()
    }
}
