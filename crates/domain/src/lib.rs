//! Roster Domain - the character aggregate, its value objects, and the
//! specification algebra used to query a roster.
//!
//! Everything here is pure and synchronous: no I/O, no logging, no clocks.

pub mod aggregates;
pub mod error;
pub mod events;
pub mod specification;
pub mod value_objects;

pub use aggregates::{Character, PlainCharacter, MAX_FIGHT_LEVEL_GAP};
pub use error::{BusinessRule, DomainError, InvalidOperationKind, ValidationKind};
pub use events::{BandChange, LevelUpOutcome};
pub use specification::{NamePattern, Specification};
pub use value_objects::{
    Capability, CharacterClass, CharacterLevel, CharacterName, LevelBand, LevelRange,
    MAX_NAME_LENGTH, MAX_POWER_FACTOR, MIN_NAME_LENGTH,
};
