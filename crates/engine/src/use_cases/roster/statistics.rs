//! Roster-wide statistics.

use std::collections::BTreeMap;
use std::sync::Arc;

use roster_domain::{CharacterClass, CharacterLevel, LevelBand};
use serde::Serialize;

use crate::infrastructure::ports::CharacterRepo;

use super::RosterError;

/// Aggregate figures over the whole roster
///
/// Every class and band appears in the breakdowns, with zero when unused.
/// For an empty roster `average_level` is 0 and the lowest/highest levels are
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterStatistics {
    pub total: usize,
    pub by_class: BTreeMap<CharacterClass, usize>,
    pub by_band: BTreeMap<LevelBand, usize>,
    pub average_level: f64,
    pub lowest_level: Option<CharacterLevel>,
    pub highest_level: Option<CharacterLevel>,
    pub total_combat_power: u64,
}

impl CharacterStatistics {
    fn empty() -> Self {
        Self {
            total: 0,
            by_class: CharacterClass::all().iter().map(|c| (*c, 0)).collect(),
            by_band: LevelBand::all().iter().map(|b| (*b, 0)).collect(),
            average_level: 0.0,
            lowest_level: None,
            highest_level: None,
            total_combat_power: 0,
        }
    }
}

pub struct RosterStatistics {
    repo: Arc<dyn CharacterRepo>,
}

impl RosterStatistics {
    pub fn new(repo: Arc<dyn CharacterRepo>) -> Self {
        Self { repo }
    }

    /// Compute statistics in a single pass over every character.
    pub fn get_character_statistics(&self) -> Result<CharacterStatistics, RosterError> {
        let mut stats = CharacterStatistics::empty();
        let mut level_sum: u64 = 0;

        for character in self.repo.find_all()? {
            let level = character.level();
            stats.total += 1;
            *stats.by_class.entry(character.class()).or_insert(0) += 1;
            *stats.by_band.entry(character.band()).or_insert(0) += 1;
            level_sum += u64::from(level.value());
            stats.total_combat_power += u64::from(character.combat_power());
            stats.lowest_level = Some(stats.lowest_level.map_or(level, |low| low.min(level)));
            stats.highest_level = Some(stats.highest_level.map_or(level, |high| high.max(level)));
        }

        if stats.total > 0 {
            stats.average_level = level_sum as f64 / stats.total as f64;
        }

        tracing::debug!(
            total = stats.total,
            average_level = stats.average_level,
            "Computed roster statistics"
        );
        Ok(stats)
    }
}
