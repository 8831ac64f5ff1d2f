//! Value objects - Immutable objects defined by their attributes

mod class;
mod level;
mod names;

pub use class::{Capability, CharacterClass, MAX_POWER_FACTOR};
pub use level::{CharacterLevel, LevelBand, LevelRange};
pub use names::{CharacterName, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
