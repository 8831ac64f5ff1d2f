//! Unified error types for the domain layer
//!
//! Every failure the roster can report is one of five kinds. Each kind maps to a
//! fixed textual code so a presentation layer can render it without matching on
//! messages.

use std::fmt;

use thiserror::Error;

/// Which value failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    InvalidName,
    InvalidLevel,
    InvalidClass,
    InvalidLevelRange,
    InvalidPattern,
}

impl ValidationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationKind::InvalidName => "InvalidName",
            ValidationKind::InvalidLevel => "InvalidLevel",
            ValidationKind::InvalidClass => "InvalidClass",
            ValidationKind::InvalidLevelRange => "InvalidLevelRange",
            ValidationKind::InvalidPattern => "InvalidPattern",
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an operation was refused in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidOperationKind {
    /// Leveling up a character already at the level cap
    MaxLevelReached,
}

impl InvalidOperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidOperationKind::MaxLevelReached => "MaxLevelReached",
        }
    }
}

impl fmt::Display for InvalidOperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A domain rule broken by a combination of individually valid inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum BusinessRule {
    #[error("a character cannot fight itself")]
    SelfCombat,

    #[error("level gap of {gap} exceeds the maximum of {max}")]
    LevelGapTooLarge { gap: u8, max: u8 },
}

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed name, level, class, range or pattern at construction
    #[error("Validation failed ({kind}): {message}")]
    Validation {
        kind: ValidationKind,
        message: String,
    },

    /// Lookup failed where existence was required
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Creation attempted for an identity already present
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },

    /// Operation not allowed in the current state
    #[error("Invalid operation ({kind}): {message}")]
    InvalidOperation {
        kind: InvalidOperationKind,
        message: String,
    },

    /// Business rule violation
    #[error("Business rule violated: {0}")]
    BusinessRuleViolation(BusinessRule),
}

impl DomainError {
    /// Creates a validation error for a value that cannot be constructed.
    ///
    /// # Example
    /// ```ignore
    /// if trimmed.chars().count() < MIN_NAME_LENGTH {
    ///     return Err(DomainError::validation(ValidationKind::InvalidName, "Character name is too short"));
    /// }
    /// ```
    pub fn validation(kind: ValidationKind, msg: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            message: msg.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create an already exists error
    pub fn already_exists(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type,
            id: id.into(),
        }
    }

    /// Create an invalid operation error
    pub fn invalid_operation(kind: InvalidOperationKind, msg: impl Into<String>) -> Self {
        Self::InvalidOperation {
            kind,
            message: msg.into(),
        }
    }

    /// Create a business rule violation
    pub fn business_rule(rule: BusinessRule) -> Self {
        Self::BusinessRuleViolation(rule)
    }

    /// Fixed textual code for this error kind, for presentation layers.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::AlreadyExists { .. } => "ALREADY_EXISTS",
            DomainError::InvalidOperation { .. } => "INVALID_OPERATION",
            DomainError::BusinessRuleViolation(_) => "BUSINESS_RULE_VIOLATION",
        }
    }

    /// Returns the validation kind if this is a validation error.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation(ValidationKind::InvalidName, "name cannot be empty");
        assert_eq!(err.validation_kind(), Some(ValidationKind::InvalidName));
        assert_eq!(
            err.to_string(),
            "Validation failed (InvalidName): name cannot be empty"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Character", "Rex");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Character not found: Rex");
    }

    #[test]
    fn test_already_exists_error() {
        let err = DomainError::already_exists("Character", "Rex");
        assert!(matches!(err, DomainError::AlreadyExists { .. }));
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_business_rule_message() {
        let err = DomainError::business_rule(BusinessRule::LevelGapTooLarge { gap: 25, max: 20 });
        assert_eq!(
            err.to_string(),
            "Business rule violated: level gap of 25 exceeds the maximum of 20"
        );
    }

    #[test]
    fn test_codes_are_fixed_per_kind() {
        let cases = [
            (
                DomainError::validation(ValidationKind::InvalidLevel, "x"),
                "VALIDATION_ERROR",
            ),
            (DomainError::not_found("Character", "x"), "NOT_FOUND"),
            (DomainError::already_exists("Character", "x"), "ALREADY_EXISTS"),
            (
                DomainError::invalid_operation(InvalidOperationKind::MaxLevelReached, "x"),
                "INVALID_OPERATION",
            ),
            (
                DomainError::business_rule(BusinessRule::SelfCombat),
                "BUSINESS_RULE_VIOLATION",
            ),
        ];
        for (err, code) in cases {
            assert_eq!(err.code(), code);
        }
    }
}
