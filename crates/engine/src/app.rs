//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{memory::InMemoryCharacterRepo, ports::CharacterRepo};
use crate::use_cases::RosterUseCases;

/// Main application state.
///
/// Holds the character repository and the use cases built on top of it.
pub struct App {
    pub repository: Arc<dyn CharacterRepo>,
    pub use_cases: RosterUseCases,
}

impl App {
    pub fn new(repository: Arc<dyn CharacterRepo>) -> Self {
        let use_cases = RosterUseCases::new(repository.clone());
        Self {
            repository,
            use_cases,
        }
    }

    /// Application backed by an empty in-memory roster.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCharacterRepo::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn use_cases_share_the_repository() {
        let app = App::in_memory();
        app.use_cases
            .management
            .create_character("Rex", "Guerreiro", 95)
            .unwrap();

        assert_eq!(app.repository.count().unwrap(), 1);
        assert_eq!(app.use_cases.queries.masters().unwrap().len(), 1);
    }
}
