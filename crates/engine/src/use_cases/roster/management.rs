//! Character commands: create, remove, level up, bulk import.

use std::sync::Arc;

use roster_domain::{Character, DomainError, LevelUpOutcome, PlainCharacter};

use crate::infrastructure::ports::CharacterRepo;
use crate::use_cases::validation::{ClassInput, LevelInput, NameInput};

use super::RosterError;

const ENTITY: &str = "Character";

/// Result of a persisted level-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeveledUp {
    pub character: Character,
    pub outcome: LevelUpOutcome,
}

pub struct CharacterManagement {
    repo: Arc<dyn CharacterRepo>,
}

impl CharacterManagement {
    pub fn new(repo: Arc<dyn CharacterRepo>) -> Self {
        Self { repo }
    }

    /// Create and store a new character.
    ///
    /// Fails with `AlreadyExists` when a character with the same name
    /// (case-insensitive) is already on the roster. The check and the insert
    /// are a single repository operation.
    pub fn create_character(
        &self,
        name: impl NameInput,
        class: impl ClassInput,
        level: impl LevelInput,
    ) -> Result<Character, RosterError> {
        let character = Character::new(name.into_name()?, class.into_class()?, level.into_level()?);

        if !self.repo.insert_new(character.clone())? {
            tracing::warn!(name = %character.name(), "Rejected duplicate character");
            return Err(DomainError::already_exists(ENTITY, character.name().as_str()).into());
        }

        tracing::info!(
            name = %character.name(),
            class = %character.class(),
            level = character.level().value(),
            "Created character"
        );
        Ok(character)
    }

    /// Remove a character by name. Fails with `NotFound` if nothing was deleted.
    pub fn remove_character(&self, name: impl NameInput) -> Result<(), RosterError> {
        let name = name.into_name()?;
        if !self.repo.remove(&name)? {
            return Err(DomainError::not_found(ENTITY, name.as_str()).into());
        }
        tracing::info!(name = %name, "Removed character");
        Ok(())
    }

    /// Raise a character's level by one and persist it.
    ///
    /// Fails with `NotFound` for an unknown name and with
    /// `InvalidOperation(MaxLevelReached)` at the level cap; in the latter case
    /// nothing is written.
    pub fn level_up_character(&self, name: impl NameInput) -> Result<LeveledUp, RosterError> {
        let name = name.into_name()?;
        let (character, outcome) = self
            .repo
            .level_up(&name)
            .map_err(RosterError::from)
            .inspect_err(|e| {
                tracing::warn!(name = %name, error = %e, "Level up refused");
            })?
            .ok_or_else(|| DomainError::not_found(ENTITY, name.as_str()))?;

        match outcome.band_changed {
            Some(change) => tracing::info!(
                name = %character.name(),
                level = outcome.current.value(),
                from = %change.from,
                to = %change.to,
                "Character leveled up into a new band"
            ),
            None => tracing::info!(
                name = %character.name(),
                level = outcome.current.value(),
                "Character leveled up"
            ),
        }

        Ok(LeveledUp { character, outcome })
    }

    /// Import plain records as new characters.
    ///
    /// Every record is validated first. The batch is then inserted in one
    /// step that fails with `AlreadyExists` if any name is taken (on the roster
    /// or within the batch), leaving the roster untouched.
    pub fn import_characters(
        &self,
        records: Vec<PlainCharacter>,
    ) -> Result<Vec<Character>, RosterError> {
        let characters = records
            .into_iter()
            .map(Character::from_plain)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(taken) = self.repo.insert_all_new(characters.clone())? {
            tracing::warn!(name = %taken, "Rejected import with duplicate character");
            return Err(DomainError::already_exists(ENTITY, taken.as_str()).into());
        }

        tracing::info!(count = characters.len(), "Imported characters");
        Ok(characters)
    }
}
