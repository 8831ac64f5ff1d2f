//! Roster use cases: character commands, queries, fight checks and statistics.
//!
//! These keep callers (CLI, HTTP, tests) thin while coordinating the character
//! repository, the specification algebra and the aggregate.

use std::sync::Arc;

use roster_domain::DomainError;

use crate::infrastructure::ports::{CharacterRepo, RepoError};

mod combat;
mod management;
mod queries;
mod statistics;

pub use combat::{CombatCheck, DuelPairing};
pub use management::{CharacterManagement, LeveledUp};
pub use queries::CharacterQueries;
pub use statistics::{CharacterStatistics, RosterStatistics};

/// Shared error type for roster use cases.
///
/// Domain errors surface unchanged; nothing here retries or swallows them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RosterError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(RepoError),
}

impl From<RepoError> for RosterError {
    fn from(err: RepoError) -> Self {
        match err {
            // Invariant failures from storage are still domain failures
            RepoError::Domain(domain) => Self::Domain(domain),
            other => Self::Repo(other),
        }
    }
}

impl RosterError {
    /// Fixed textual code for presentation layers.
    pub fn code(&self) -> &'static str {
        match self {
            RosterError::Domain(err) => err.code(),
            RosterError::Repo(_) => "STORAGE_ERROR",
        }
    }

    /// The domain error, if this is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            RosterError::Domain(err) => Some(err),
            RosterError::Repo(_) => None,
        }
    }
}

/// Container for roster use cases.
pub struct RosterUseCases {
    pub management: CharacterManagement,
    pub queries: CharacterQueries,
    pub combat: CombatCheck,
    pub statistics: RosterStatistics,
}

impl RosterUseCases {
    pub fn new(repo: Arc<dyn CharacterRepo>) -> Self {
        Self {
            management: CharacterManagement::new(repo.clone()),
            queries: CharacterQueries::new(repo.clone()),
            combat: CombatCheck::new(repo.clone()),
            statistics: RosterStatistics::new(repo),
        }
    }
}
