//! Use cases - User story orchestration.
//!
//! Use cases coordinate the character repository and the domain aggregate to
//! fulfil roster operations. Callers stay thin.

pub mod roster;
pub mod validation;

pub use roster::{
    CharacterManagement, CharacterQueries, CharacterStatistics, CombatCheck, DuelPairing,
    LeveledUp, RosterError, RosterStatistics, RosterUseCases,
};
