//! Error types for port operations.

use roster_domain::DomainError;

/// Repository operation errors with context for debugging.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepoError {
    /// Backing store failed - includes operation name for tracing.
    #[error("Storage error in {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
    },

    /// Stored data no longer satisfies the domain invariants.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl RepoError {
    /// Create a Storage error with operation context.
    pub fn storage(operation: &'static str, message: impl ToString) -> Self {
        Self::Storage {
            operation,
            message: message.to_string(),
        }
    }

    /// Check if this is a Storage error.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }
}
