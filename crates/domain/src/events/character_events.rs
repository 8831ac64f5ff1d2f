//! Character-related domain events
//!
//! These values communicate what happened when character state was modified,
//! allowing callers to react appropriately.

use serde::{Deserialize, Serialize};

use crate::value_objects::{CharacterLevel, LevelBand};

/// Outcome of a successful level-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelUpOutcome {
    pub previous: CharacterLevel,
    pub current: CharacterLevel,
    /// Set when the new level crossed into another band
    pub band_changed: Option<BandChange>,
}

/// A move from one level band to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandChange {
    pub from: LevelBand,
    pub to: LevelBand,
}

impl LevelUpOutcome {
    pub fn new(previous: CharacterLevel, current: CharacterLevel) -> Self {
        let (from, to) = (previous.classify(), current.classify());
        Self {
            previous,
            current,
            band_changed: (from != to).then_some(BandChange { from, to }),
        }
    }

    pub fn reached_max(&self) -> bool {
        self.current.is_max()
    }
}
