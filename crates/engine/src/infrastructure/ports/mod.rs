//! Port traits for infrastructure boundaries.
//!
//! Storage is the only abstraction the engine needs: the in-memory roster is the
//! reference backend, and any other store satisfying `CharacterRepo` can replace it.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::CharacterRepo;

#[cfg(test)]
pub use repos::MockCharacterRepo;
