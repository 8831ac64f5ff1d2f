//! Specification algebra - composable predicates over characters
//!
//! A [`Specification`] is a small expression tree: leaf criteria combined with
//! `And`, `Or` and `Not`. Evaluation is a single recursive match, pure and
//! side-effect free. `And`/`Or` evaluate the left operand first and short-circuit.
//!
//! ```
//! use roster_domain::aggregates::Character;
//! use roster_domain::specification::Specification;
//! use roster_domain::value_objects::CharacterLevel;
//!
//! let spec = Specification::by_minimum_level(CharacterLevel::new(60).unwrap())
//!     .and(Specification::experienced());
//!
//! let ana = Character::from_raw("Ana", "Guerreiro", 50).unwrap();
//! let bia = Character::from_raw("Bia", "Mago", 80).unwrap();
//! assert!(!spec.is_satisfied_by(&ana));
//! assert!(spec.is_satisfied_by(&bia));
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use regex_lite::{Regex, RegexBuilder};

use crate::aggregates::Character;
use crate::error::{DomainError, ValidationKind};
use crate::value_objects::{CharacterClass, CharacterLevel, LevelBand};

/// A compiled, case-insensitive name pattern
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    regex: Regex,
}

impl NamePattern {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` with kind `InvalidPattern` if the pattern
    /// does not compile.
    pub fn new(pattern: impl Into<String>) -> Result<Self, DomainError> {
        let source = pattern.into();
        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                DomainError::validation(
                    ValidationKind::InvalidPattern,
                    format!("Invalid name pattern '{}': {}", source, e),
                )
            })?;
        Ok(Self { source, regex })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the pattern matches anywhere in `name`.
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for NamePattern {}

/// A composable predicate over [`Character`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specification {
    /// Class equals the given class
    ByClass(CharacterClass),
    /// Level is at least the given level (inclusive)
    ByMinimumLevel(CharacterLevel),
    /// Level band is experienced
    Experienced,
    /// Level band is master
    Master,
    /// Combat power is at least the given value (inclusive)
    ByMinimumCombatPower(u32),
    /// Name matches the pattern, case-insensitively, anywhere in the name
    ByNamePattern(NamePattern),
    And(Box<Specification>, Box<Specification>),
    Or(Box<Specification>, Box<Specification>),
    Not(Box<Specification>),
}

impl Specification {
    // =========================================================================
    // Leaf constructors
    // =========================================================================

    pub fn by_class(class: CharacterClass) -> Self {
        Self::ByClass(class)
    }

    pub fn by_minimum_level(level: CharacterLevel) -> Self {
        Self::ByMinimumLevel(level)
    }

    pub fn experienced() -> Self {
        Self::Experienced
    }

    pub fn master() -> Self {
        Self::Master
    }

    pub fn by_minimum_combat_power(power: u32) -> Self {
        Self::ByMinimumCombatPower(power)
    }

    /// # Errors
    ///
    /// Returns `DomainError::Validation` with kind `InvalidPattern` for a pattern
    /// that does not compile.
    pub fn by_name_pattern(pattern: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self::ByNamePattern(NamePattern::new(pattern)?))
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    pub fn and(self, other: Specification) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Specification) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Conjunction of every spec, left-folded. `None` when `specs` is empty.
    pub fn all(specs: impl IntoIterator<Item = Specification>) -> Option<Self> {
        specs.into_iter().reduce(Specification::and)
    }

    /// Disjunction of every spec, left-folded. `None` when `specs` is empty.
    pub fn any(specs: impl IntoIterator<Item = Specification>) -> Option<Self> {
        specs.into_iter().reduce(Specification::or)
    }

    // =========================================================================
    // Evaluation
    // =========================================================================

    pub fn is_satisfied_by(&self, character: &Character) -> bool {
        match self {
            Specification::ByClass(class) => character.class() == *class,
            Specification::ByMinimumLevel(level) => character.level() >= *level,
            Specification::Experienced => character.band() == LevelBand::Experienced,
            Specification::Master => character.band() == LevelBand::Master,
            Specification::ByMinimumCombatPower(power) => character.combat_power() >= *power,
            Specification::ByNamePattern(pattern) => pattern.is_match(character.name().as_str()),
            Specification::And(left, right) => {
                left.is_satisfied_by(character) && right.is_satisfied_by(character)
            }
            Specification::Or(left, right) => {
                left.is_satisfied_by(character) || right.is_satisfied_by(character)
            }
            Specification::Not(inner) => !inner.is_satisfied_by(character),
        }
    }

    /// Characters satisfying this spec, in input order.
    pub fn select(&self, characters: impl IntoIterator<Item = Character>) -> Vec<Character> {
        characters
            .into_iter()
            .filter(|character| self.is_satisfied_by(character))
            .collect()
    }
}

impl BitAnd for Specification {
    type Output = Specification;

    fn bitand(self, rhs: Specification) -> Specification {
        self.and(rhs)
    }
}

impl BitOr for Specification {
    type Output = Specification;

    fn bitor(self, rhs: Specification) -> Specification {
        self.or(rhs)
    }
}

impl Not for Specification {
    type Output = Specification;

    fn not(self) -> Specification {
        self.negate()
    }
}

impl fmt::Display for Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specification::ByClass(class) => write!(f, "class = {}", class),
            Specification::ByMinimumLevel(level) => write!(f, "level >= {}", level),
            Specification::Experienced => f.write_str("experienced"),
            Specification::Master => f.write_str("master"),
            Specification::ByMinimumCombatPower(power) => write!(f, "combat power >= {}", power),
            Specification::ByNamePattern(pattern) => write!(f, "name ~ /{}/i", pattern.as_str()),
            Specification::And(left, right) => write!(f, "({} AND {})", left, right),
            Specification::Or(left, right) => write!(f, "({} OR {})", left, right),
            Specification::Not(inner) => write!(f, "NOT {}", inner),
        }
    }
}
