//! Repository port traits for character storage.

use roster_domain::{
    Character, CharacterClass, CharacterName, LevelRange, LevelUpOutcome, Specification,
};

use super::error::RepoError;

// =============================================================================
// Character Storage
// =============================================================================

/// Name-keyed character store.
///
/// Identity is the case-insensitive character name. Iteration follows
/// insertion order. Every read returns owned copies; nothing a caller holds
/// aliases the store's internal state.
///
/// Each operation is atomic from the caller's point of view and fails outright
/// rather than retrying.
#[cfg_attr(test, mockall::automock)]
pub trait CharacterRepo: Send + Sync {
    fn find_by_name(&self, name: &CharacterName) -> Result<Option<Character>, RepoError>;
    fn find_all(&self) -> Result<Vec<Character>, RepoError>;
    fn find_by_class(&self, class: CharacterClass) -> Result<Vec<Character>, RepoError>;
    fn find_by_level_range(&self, range: &LevelRange) -> Result<Vec<Character>, RepoError>;

    /// Insert or overwrite the character with the same name.
    fn save(&self, character: Character) -> Result<Character, RepoError>;

    /// Insert only if the name is free. Returns false, writing nothing, when
    /// the name is already taken.
    fn insert_new(&self, character: Character) -> Result<bool, RepoError>;

    /// Insert a batch only if every name is free, both in the store and within
    /// the batch. Otherwise nothing is written and the first conflicting name
    /// is returned.
    fn insert_all_new(
        &self,
        characters: Vec<Character>,
    ) -> Result<Option<CharacterName>, RepoError>;

    /// Level up the stored character in place.
    ///
    /// `Ok(None)` when no such character exists. A refusal from the aggregate
    /// comes back as `RepoError::Domain` and leaves the stored character as it was.
    fn level_up(
        &self,
        name: &CharacterName,
    ) -> Result<Option<(Character, LevelUpOutcome)>, RepoError>;

    /// Returns true if an entry existed and was deleted.
    fn remove(&self, name: &CharacterName) -> Result<bool, RepoError>;

    fn exists(&self, name: &CharacterName) -> Result<bool, RepoError>;
    fn count(&self) -> Result<usize, RepoError>;

    /// Equivalent to filtering `find_all` with the spec.
    fn find_by_specification(&self, spec: &Specification) -> Result<Vec<Character>, RepoError> {
        Ok(spec.select(self.find_all()?))
    }
}
