//! In-memory character repository
//!
//! Characters live in an insertion-ordered map keyed by the normalized
//! (lower-cased) name. A single `RwLock` serialises every mutation; reads clone
//! out of the map so callers never alias stored state. Data is not persisted.

use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::{map::Entry, IndexMap};
use roster_domain::{
    Character, CharacterClass, CharacterName, LevelRange, LevelUpOutcome, Specification,
};

use crate::infrastructure::ports::{CharacterRepo, RepoError};

type Entries = IndexMap<String, Character>;

/// In-memory `CharacterRepo` implementation
#[derive(Debug, Default)]
pub struct InMemoryCharacterRepo {
    entries: RwLock<Entries>,
}

impl InMemoryCharacterRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository pre-populated with `characters`, later duplicates
    /// overwriting earlier ones.
    pub fn with_characters(characters: impl IntoIterator<Item = Character>) -> Self {
        let entries = characters
            .into_iter()
            .map(|character| (character.name().normalized(), character))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    fn read(&self, operation: &'static str) -> Result<RwLockReadGuard<'_, Entries>, RepoError> {
        self.entries
            .read()
            .map_err(|e| RepoError::storage(operation, e))
    }

    fn write(&self, operation: &'static str) -> Result<RwLockWriteGuard<'_, Entries>, RepoError> {
        self.entries
            .write()
            .map_err(|e| RepoError::storage(operation, e))
    }

    fn filtered(
        &self,
        operation: &'static str,
        predicate: impl Fn(&Character) -> bool,
    ) -> Result<Vec<Character>, RepoError> {
        Ok(self
            .read(operation)?
            .values()
            .filter(|character| predicate(character))
            .cloned()
            .collect())
    }
}

impl CharacterRepo for InMemoryCharacterRepo {
    fn find_by_name(&self, name: &CharacterName) -> Result<Option<Character>, RepoError> {
        Ok(self
            .read("find_by_name")?
            .get(&name.normalized())
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<Character>, RepoError> {
        Ok(self.read("find_all")?.values().cloned().collect())
    }

    fn find_by_class(&self, class: CharacterClass) -> Result<Vec<Character>, RepoError> {
        self.filtered("find_by_class", |character| character.class() == class)
    }

    fn find_by_level_range(&self, range: &LevelRange) -> Result<Vec<Character>, RepoError> {
        self.filtered("find_by_level_range", |character| {
            range.contains(character.level())
        })
    }

    fn save(&self, character: Character) -> Result<Character, RepoError> {
        let key = character.name().normalized();
        let replaced = self
            .write("save")?
            .insert(key, character.clone())
            .is_some();
        tracing::debug!(
            name = %character.name(),
            replaced,
            "Saved character"
        );
        Ok(character)
    }

    fn insert_new(&self, character: Character) -> Result<bool, RepoError> {
        let mut entries = self.write("insert_new")?;
        match entries.entry(character.name().normalized()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                tracing::debug!(name = %character.name(), "Inserted character");
                slot.insert(character);
                Ok(true)
            }
        }
    }

    fn insert_all_new(
        &self,
        characters: Vec<Character>,
    ) -> Result<Option<CharacterName>, RepoError> {
        let mut entries = self.write("insert_all_new")?;

        let mut seen = HashSet::new();
        for character in &characters {
            let key = character.name().normalized();
            if entries.contains_key(&key) || !seen.insert(key) {
                return Ok(Some(character.name().clone()));
            }
        }

        let count = characters.len();
        entries.extend(
            characters
                .into_iter()
                .map(|character| (character.name().normalized(), character)),
        );
        tracing::debug!(count, "Inserted character batch");
        Ok(None)
    }

    fn level_up(
        &self,
        name: &CharacterName,
    ) -> Result<Option<(Character, LevelUpOutcome)>, RepoError> {
        let mut entries = self.write("level_up")?;
        let Some(character) = entries.get_mut(&name.normalized()) else {
            return Ok(None);
        };
        let outcome = character.level_up()?;
        Ok(Some((character.clone(), outcome)))
    }

    fn remove(&self, name: &CharacterName) -> Result<bool, RepoError> {
        let removed = self
            .write("remove")?
            .shift_remove(&name.normalized())
            .is_some();
        tracing::debug!(name = %name, removed, "Removed character");
        Ok(removed)
    }

    fn exists(&self, name: &CharacterName) -> Result<bool, RepoError> {
        Ok(self.read("exists")?.contains_key(&name.normalized()))
    }

    fn count(&self) -> Result<usize, RepoError> {
        Ok(self.read("count")?.len())
    }

    fn find_by_specification(&self, spec: &Specification) -> Result<Vec<Character>, RepoError> {
        self.filtered("find_by_specification", |character| {
            spec.is_satisfied_by(character)
        })
    }
}
