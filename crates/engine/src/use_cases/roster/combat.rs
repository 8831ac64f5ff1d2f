//! Fight eligibility between roster characters.
//!
//! This only decides whether two characters may be paired; it never resolves
//! a fight.

use std::cmp::Ordering;
use std::sync::Arc;

use roster_domain::{Character, CharacterName, DomainError};

use crate::infrastructure::ports::CharacterRepo;
use crate::use_cases::validation::NameInput;

use super::RosterError;

/// Two characters cleared to fight each other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelPairing {
    pub challenger: Character,
    pub opponent: Character,
    pub level_gap: u8,
    /// Name of the character with more combat power, `None` on a tie
    pub favoured: Option<CharacterName>,
}

pub struct CombatCheck {
    repo: Arc<dyn CharacterRepo>,
}

impl CombatCheck {
    pub fn new(repo: Arc<dyn CharacterRepo>) -> Self {
        Self { repo }
    }

    fn load(&self, name: impl NameInput) -> Result<Character, RosterError> {
        let name = name.into_name()?;
        self.repo
            .find_by_name(&name)?
            .ok_or_else(|| DomainError::not_found("Character", name.as_str()).into())
    }

    /// Whether both characters exist and may fight each other.
    pub fn can_fight(
        &self,
        challenger: impl NameInput,
        opponent: impl NameInput,
    ) -> Result<bool, RosterError> {
        let challenger = self.load(challenger)?;
        let opponent = self.load(opponent)?;
        Ok(challenger.can_fight(&opponent))
    }

    /// Pair two characters for a fight.
    ///
    /// Fails with `NotFound` if either is missing and with
    /// `BusinessRuleViolation` when they are the same character or their level
    /// gap is too large.
    pub fn arrange_duel(
        &self,
        challenger: impl NameInput,
        opponent: impl NameInput,
    ) -> Result<DuelPairing, RosterError> {
        let challenger = self.load(challenger)?;
        let opponent = self.load(opponent)?;

        challenger.check_fight(&opponent).inspect_err(|e| {
            tracing::warn!(
                challenger = %challenger.name(),
                opponent = %opponent.name(),
                error = %e,
                "Duel refused"
            );
        })?;

        let favoured = match challenger.combat_power().cmp(&opponent.combat_power()) {
            Ordering::Greater => Some(challenger.name().clone()),
            Ordering::Less => Some(opponent.name().clone()),
            Ordering::Equal => None,
        };
        let level_gap = challenger.level().difference_from(&opponent.level());

        tracing::info!(
            challenger = %challenger.name(),
            opponent = %opponent.name(),
            level_gap,
            "Duel arranged"
        );

        Ok(DuelPairing {
            challenger,
            opponent,
            level_gap,
            favoured,
        })
    }
}
