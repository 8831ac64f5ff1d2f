//! Validated character name
//!
//! Names are valid by construction:
//! - Trimmed of leading/trailing whitespace
//! - At least 2 and at most 50 characters after trimming
//! - Compared case-insensitively, displayed with their original casing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{DomainError, ValidationKind};

/// Minimum length for a character name
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum length for a character name
pub const MAX_NAME_LENGTH: usize = 50;

// ============================================================================
// CharacterName
// ============================================================================

/// A validated character name (2..=50 chars, trimmed, case-insensitive identity)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` with kind `InvalidName` if:
    /// - The name is empty after trimming
    /// - The name is shorter than 2 characters after trimming
    /// - The name exceeds 50 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidName,
                "Character name cannot be empty",
            ));
        }
        let length = trimmed.chars().count();
        if length < MIN_NAME_LENGTH {
            return Err(DomainError::validation(
                ValidationKind::InvalidName,
                format!(
                    "Character name must have at least {} characters",
                    MIN_NAME_LENGTH
                ),
            ));
        }
        if length > MAX_NAME_LENGTH {
            return Err(DomainError::validation(
                ValidationKind::InvalidName,
                format!(
                    "Character name cannot exceed {} characters",
                    MAX_NAME_LENGTH
                ),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice, with its original casing.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used as the identity key.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl PartialEq for CharacterName {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl Eq for CharacterName {}

impl Hash for CharacterName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for CharacterName {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}
