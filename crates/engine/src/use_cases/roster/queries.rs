//! Character queries, including the specification-based convenience filters.

use std::sync::Arc;

use roster_domain::{Character, CharacterClass, DomainError, LevelRange, Specification};

use crate::infrastructure::ports::CharacterRepo;
use crate::use_cases::validation::{ClassInput, LevelInput, NameInput};

use super::RosterError;

pub struct CharacterQueries {
    repo: Arc<dyn CharacterRepo>,
}

impl CharacterQueries {
    pub fn new(repo: Arc<dyn CharacterRepo>) -> Self {
        Self { repo }
    }

    pub fn find_character(&self, name: impl NameInput) -> Result<Option<Character>, RosterError> {
        Ok(self.repo.find_by_name(&name.into_name()?)?)
    }

    /// Like `find_character`, failing with `NotFound` when absent.
    pub fn get_character(&self, name: impl NameInput) -> Result<Character, RosterError> {
        let name = name.into_name()?;
        self.repo
            .find_by_name(&name)?
            .ok_or_else(|| DomainError::not_found("Character", name.as_str()).into())
    }

    pub fn list_characters(&self) -> Result<Vec<Character>, RosterError> {
        Ok(self.repo.find_all()?)
    }

    pub fn count_characters(&self) -> Result<usize, RosterError> {
        Ok(self.repo.count()?)
    }

    pub fn find_characters_by_class(
        &self,
        class: impl ClassInput,
    ) -> Result<Vec<Character>, RosterError> {
        Ok(self.repo.find_by_class(class.into_class()?)?)
    }

    /// Characters with `min <= level <= max`. Fails validation if `min > max`.
    pub fn find_characters_by_level_range(
        &self,
        min: impl LevelInput,
        max: impl LevelInput,
    ) -> Result<Vec<Character>, RosterError> {
        let range = LevelRange::new(min.into_level()?, max.into_level()?)?;
        Ok(self.repo.find_by_level_range(&range)?)
    }

    pub fn find_characters_by_specification(
        &self,
        spec: &Specification,
    ) -> Result<Vec<Character>, RosterError> {
        let found = self.repo.find_by_specification(spec)?;
        tracing::debug!(spec = %spec, matched = found.len(), "Specification query");
        Ok(found)
    }

    // =========================================================================
    // Convenience filters
    // =========================================================================

    pub fn novices(&self) -> Result<Vec<Character>, RosterError> {
        self.find_characters_by_specification(
            &Specification::experienced()
                .or(Specification::master())
                .negate(),
        )
    }

    pub fn experienced(&self) -> Result<Vec<Character>, RosterError> {
        self.find_characters_by_specification(&Specification::experienced())
    }

    pub fn masters(&self) -> Result<Vec<Character>, RosterError> {
        self.find_characters_by_specification(&Specification::master())
    }

    /// Warriors (`Guerreiro`) with at least `min_power` combat power.
    pub fn powerful_warriors(&self, min_power: u32) -> Result<Vec<Character>, RosterError> {
        self.find_characters_by_specification(
            &Specification::by_class(CharacterClass::Guerreiro)
                .and(Specification::by_minimum_combat_power(min_power)),
        )
    }

    /// Characters whose name matches `pattern` (case-insensitive regex).
    pub fn find_characters_by_name_pattern(
        &self,
        pattern: &str,
    ) -> Result<Vec<Character>, RosterError> {
        self.find_characters_by_specification(&Specification::by_name_pattern(pattern)?)
    }
}
