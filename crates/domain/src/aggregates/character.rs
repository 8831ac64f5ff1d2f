//! Character aggregate - a named combatant with a class and a level
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: state is reachable only through accessors and `level_up`
//! - **Newtypes**: `CharacterName`, `CharacterClass` and `CharacterLevel` are valid by construction
//! - **Domain events**: `level_up` returns a `LevelUpOutcome`
//! - **Identity**: the name; two characters are the same character when their
//!   names match case-insensitively
//!
//! The flat [`PlainCharacter`] record is the only persisted/transmitted shape.

use serde::{Deserialize, Serialize};

use crate::error::{BusinessRule, DomainError, InvalidOperationKind};
use crate::events::LevelUpOutcome;
use crate::value_objects::{CharacterClass, CharacterLevel, CharacterName, LevelBand};

/// Largest level gap at which two characters may still fight
pub const MAX_FIGHT_LEVEL_GAP: u8 = 20;

/// A character on the roster
///
/// # Invariants
///
/// - `name` is always 2..=50 characters, trimmed (enforced by `CharacterName`)
/// - `level` is always within `[1, 100]` (enforced by `CharacterLevel`)
/// - `class` is always one of the known classes (enforced by `CharacterClass`)
///
/// # Example
///
/// ```
/// use roster_domain::aggregates::Character;
/// use roster_domain::value_objects::{CharacterClass, CharacterLevel, CharacterName};
///
/// let character = Character::new(
///     CharacterName::new("Rex").unwrap(),
///     CharacterClass::Guerreiro,
///     CharacterLevel::new(95).unwrap(),
/// );
///
/// assert_eq!(character.name().as_str(), "Rex");
/// assert!(character.is_master());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlainCharacter", into = "PlainCharacter")]
pub struct Character {
    name: CharacterName,
    class: CharacterClass,
    level: CharacterLevel,
}

impl Character {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a character from pre-validated value objects.
    pub fn new(name: CharacterName, class: CharacterClass, level: CharacterLevel) -> Self {
        Self { name, class, level }
    }

    /// Create a character from raw primitives, validating each through its
    /// value object.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_domain::aggregates::Character;
    /// use roster_domain::value_objects::CharacterClass;
    ///
    /// let character = Character::from_raw("Merlin", "mago", 42).unwrap();
    /// assert_eq!(character.class(), CharacterClass::Mago);
    ///
    /// assert!(Character::from_raw("Merlin", "bardo", 42).is_err());
    /// ```
    pub fn from_raw(
        name: impl Into<String>,
        class: &str,
        level: impl Into<i64>,
    ) -> Result<Self, DomainError> {
        Ok(Self::new(
            CharacterName::new(name)?,
            CharacterClass::parse(class)?,
            CharacterLevel::new(level)?,
        ))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    #[inline]
    pub fn class(&self) -> CharacterClass {
        self.class
    }

    #[inline]
    pub fn level(&self) -> CharacterLevel {
        self.level
    }

    #[inline]
    pub fn band(&self) -> LevelBand {
        self.level.classify()
    }

    pub fn is_novice(&self) -> bool {
        self.band() == LevelBand::Novice
    }

    pub fn is_experienced(&self) -> bool {
        self.band() == LevelBand::Experienced
    }

    pub fn is_master(&self) -> bool {
        self.band() == LevelBand::Master
    }

    pub fn abilities(&self) -> &'static [&'static str] {
        self.class.abilities()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Raise the level by one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOperation` with kind `MaxLevelReached` when the
    /// character is already at level 100. The level is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_domain::aggregates::Character;
    ///
    /// let mut character = Character::from_raw("Robin", "Arqueiro", 19).unwrap();
    /// let outcome = character.level_up().unwrap();
    ///
    /// assert_eq!(outcome.current.value(), 20);
    /// assert!(outcome.band_changed.is_some());
    /// ```
    pub fn level_up(&mut self) -> Result<LevelUpOutcome, DomainError> {
        let previous = self.level;
        let next = previous.next().ok_or_else(|| {
            DomainError::invalid_operation(
                InvalidOperationKind::MaxLevelReached,
                format!(
                    "{} is already at the maximum level {}",
                    self.name,
                    CharacterLevel::MAX
                ),
            )
        })?;
        self.level = next;
        Ok(LevelUpOutcome::new(previous, next))
    }

    // =========================================================================
    // Derived behavior
    // =========================================================================

    /// Relative strength of this character.
    ///
    /// `level * class.power_factor()`: strictly increasing in level and always
    /// within `(0, level * MAX_POWER_FACTOR]`.
    pub fn combat_power(&self) -> u32 {
        u32::from(self.level.value()) * self.class.power_factor()
    }

    /// Whether the two characters may fight each other.
    ///
    /// False against itself (same name) or when the level gap exceeds 20.
    pub fn can_fight(&self, other: &Character) -> bool {
        self.check_fight(other).is_ok()
    }

    /// Like [`Character::can_fight`], reporting which rule refused the fight.
    pub fn check_fight(&self, other: &Character) -> Result<(), DomainError> {
        if self.name == other.name {
            return Err(DomainError::business_rule(BusinessRule::SelfCombat));
        }
        let gap = self.level.difference_from(&other.level);
        if gap > MAX_FIGHT_LEVEL_GAP {
            return Err(DomainError::business_rule(BusinessRule::LevelGapTooLarge {
                gap,
                max: MAX_FIGHT_LEVEL_GAP,
            }));
        }
        Ok(())
    }

    /// Human-readable summary, e.g. `Rex (Guerreiro, level 95, master)`.
    pub fn describe(&self) -> String {
        format!(
            "{} ({}, level {}, {})",
            self.name,
            self.class,
            self.level,
            self.band()
        )
    }

    // =========================================================================
    // Plain record conversion
    // =========================================================================

    pub fn to_plain(&self) -> PlainCharacter {
        PlainCharacter {
            name: self.name.as_str().to_string(),
            class: self.class.as_str().to_string(),
            level: i64::from(self.level.value()),
        }
    }

    /// Rebuild a character from its plain record, re-validating every field.
    pub fn from_plain(plain: PlainCharacter) -> Result<Self, DomainError> {
        Self::from_raw(plain.name, &plain.class, plain.level)
    }
}

/// Flat `{name, class, level}` record used for persistence and transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainCharacter {
    pub name: String,
    pub class: String,
    pub level: i64,
}

impl TryFrom<PlainCharacter> for Character {
    type Error = DomainError;

    fn try_from(plain: PlainCharacter) -> Result<Self, Self::Error> {
        Character::from_plain(plain)
    }
}

impl From<Character> for PlainCharacter {
    fn from(character: Character) -> Self {
        character.to_plain()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationKind;
    use crate::value_objects::MAX_POWER_FACTOR;

    fn character(name: &str, class: &str, level: i64) -> Character {
        Character::from_raw(name, class, level).unwrap()
    }

    mod constructor {
        use super::*;

        #[test]
        fn from_raw_normalizes_inputs() {
            let c = character("  Rex ", "guerreiro", 95);
            assert_eq!(c.name().as_str(), "Rex");
            assert_eq!(c.class(), CharacterClass::Guerreiro);
            assert_eq!(c.level().value(), 95);
        }

        #[test]
        fn from_raw_matches_value_object_constructor() {
            let raw = character("Merlin", "Mago", 42);
            let typed = Character::new(
                CharacterName::new("Merlin").unwrap(),
                CharacterClass::Mago,
                CharacterLevel::new(42).unwrap(),
            );
            assert_eq!(raw, typed);
        }

        #[test]
        fn from_raw_reports_the_failing_field() {
            let kind = |r: Result<Character, DomainError>| r.unwrap_err().validation_kind();
            assert_eq!(
                kind(Character::from_raw("R", "Mago", 10)),
                Some(ValidationKind::InvalidName)
            );
            assert_eq!(
                kind(Character::from_raw("Rex", "Bardo", 10)),
                Some(ValidationKind::InvalidClass)
            );
            assert_eq!(
                kind(Character::from_raw("Rex", "Mago", 101)),
                Some(ValidationKind::InvalidLevel)
            );
        }
    }

    mod level_up {
        use super::*;

        #[test]
        fn increments_level() {
            let mut c = character("Rex", "Guerreiro", 50);
            let outcome = c.level_up().unwrap();
            assert_eq!(outcome.previous.value(), 50);
            assert_eq!(outcome.current.value(), 51);
            assert_eq!(outcome.band_changed, None);
            assert_eq!(c.level().value(), 51);
        }

        #[test]
        fn reports_band_change() {
            let mut c = character("Rex", "Guerreiro", 89);
            let outcome = c.level_up().unwrap();
            let change = outcome.band_changed.unwrap();
            assert_eq!(change.from, LevelBand::Experienced);
            assert_eq!(change.to, LevelBand::Master);
        }

        #[test]
        fn at_cap_fails_and_leaves_level_unchanged() {
            let mut c = character("Rex", "Guerreiro", 99);
            assert!(c.level_up().unwrap().reached_max());

            let err = c.level_up().unwrap_err();
            assert!(matches!(
                err,
                DomainError::InvalidOperation {
                    kind: InvalidOperationKind::MaxLevelReached,
                    ..
                }
            ));
            assert_eq!(c.level().value(), 100);
        }
    }

    mod combat_power {
        use super::*;

        #[test]
        fn strictly_increasing_in_level() {
            for class in CharacterClass::all() {
                for level in 1..100 {
                    let lower = character("Probe", class.as_str(), level);
                    let higher = character("Probe", class.as_str(), level + 1);
                    assert!(higher.combat_power() > lower.combat_power());
                }
            }
        }

        #[test]
        fn bounded_by_level_times_max_factor() {
            for class in CharacterClass::all() {
                for level in 1..=100 {
                    let power = character("Probe", class.as_str(), level).combat_power();
                    assert!(power > 0);
                    assert!(power <= level as u32 * MAX_POWER_FACTOR);
                }
            }
        }

        #[test]
        fn melee_not_weaker_than_weakest_non_melee() {
            for level in [1, 20, 55, 100] {
                let weakest_non_melee = CharacterClass::all()
                    .iter()
                    .filter(|c| !c.is_melee())
                    .map(|c| character("Probe", c.as_str(), level).combat_power())
                    .min()
                    .unwrap();
                for melee in CharacterClass::all().iter().filter(|c| c.is_melee()) {
                    let power = character("Probe", melee.as_str(), level).combat_power();
                    assert!(power >= weakest_non_melee);
                }
            }
        }
    }

    mod fighting {
        use super::*;

        #[test]
        fn level_gap_above_twenty_cannot_fight() {
            let a = character("Alpha", "Guerreiro", 10);
            let b = character("Bravo", "Mago", 35);
            assert!(!a.can_fight(&b));
            assert!(!b.can_fight(&a));
            assert_eq!(
                a.check_fight(&b).unwrap_err(),
                DomainError::business_rule(BusinessRule::LevelGapTooLarge { gap: 25, max: 20 })
            );
        }

        #[test]
        fn level_gap_within_twenty_can_fight() {
            let a = character("Alpha", "Guerreiro", 10);
            let b = character("Bravo", "Mago", 25);
            assert!(a.can_fight(&b));

            let edge = character("Charlie", "Mago", 30);
            assert!(a.can_fight(&edge));
        }

        #[test]
        fn cannot_fight_itself() {
            let a = character("Alpha", "Guerreiro", 10);
            assert!(!a.can_fight(&a));

            let same_name = character("ALPHA", "Mago", 12);
            assert_eq!(
                a.check_fight(&same_name).unwrap_err(),
                DomainError::business_rule(BusinessRule::SelfCombat)
            );
        }
    }

    mod plain {
        use super::*;

        #[test]
        fn describe_contains_name_class_and_level() {
            let c = character("Rex", "guerreiro", 95);
            assert_eq!(c.describe(), "Rex (Guerreiro, level 95, master)");
        }

        #[test]
        fn round_trip_preserves_all_fields() {
            for c in [
                character("Rex", "Guerreiro", 95),
                character("merlin", "MAGO", 1),
                character("Robin Hood", "archer", 100),
            ] {
                let back = Character::from_plain(c.to_plain()).unwrap();
                assert_eq!(back.name().as_str(), c.name().as_str());
                assert_eq!(back.class(), c.class());
                assert_eq!(back.level(), c.level());
            }
        }

        #[test]
        fn plain_uses_canonical_class() {
            let plain = character("Robin", "archer", 30).to_plain();
            assert_eq!(
                plain,
                PlainCharacter {
                    name: "Robin".to_string(),
                    class: "Arqueiro".to_string(),
                    level: 30,
                }
            );
        }

        #[test]
        fn from_plain_revalidates() {
            let invalid = PlainCharacter {
                name: "Rex".to_string(),
                class: "Guerreiro".to_string(),
                level: 0,
            };
            let err = Character::from_plain(invalid).unwrap_err();
            assert_eq!(err.validation_kind(), Some(ValidationKind::InvalidLevel));
        }

        #[test]
        fn serde_uses_flat_record() {
            let c = character("Rex", "Guerreiro", 95);
            let json = serde_json::to_value(&c).unwrap();
            assert_eq!(
                json,
                serde_json::json!({"name": "Rex", "class": "Guerreiro", "level": 95})
            );

            let back: Character = serde_json::from_value(json).unwrap();
            assert_eq!(back, c);

            let bad = serde_json::json!({"name": "Rex", "class": "Bardo", "level": 5});
            assert!(serde_json::from_value::<Character>(bad).is_err());
        }
    }
}
