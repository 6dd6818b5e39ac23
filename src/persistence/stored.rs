//! On-disk shape of a player's records
//!
//! Every field is optional. Loading starts from a default record and applies
//! only what was stored, so older or hand-edited files still produce a fully
//! populated `PlayerRecord`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::config::RecordDefaults;
use crate::core::types::{CreatureId, PlayerId};
use crate::creature::category_by_name;
use crate::difficulty::{DifficultyRecord, EffectToggles, Mode};
use crate::registry::PlayerRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredPlayer {
    /// Keyed by category name
    pub categories: BTreeMap<String, StoredDifficulty>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredDifficulty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_step: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_given: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_taken: Option<f64>,
    /// Encountered opponent ids, bit-cast to i64 (TOML integers are signed)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub encountered: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<EffectToggles>,
}

impl StoredDifficulty {
    pub fn capture(record: &DifficultyRecord) -> Self {
        let mut encountered: Vec<i64> = record.encountered().map(|id| id.0 as i64).collect();
        encountered.sort_unstable();

        Self {
            mode: Some(record.mode()),
            estimated_level: Some(record.estimated_level()),
            auto_level: Some(record.auto_level()),
            manual_level: Some(record.manual_level()),
            max_step: Some(record.max_step() as i64),
            damage_given: Some(record.damage_given()),
            damage_taken: Some(record.damage_taken()),
            encountered,
            effects: Some(record.toggles()),
        }
    }

    /// Overlay stored values onto `record`, clamping as the setters do
    pub fn apply_to(&self, record: &mut DifficultyRecord) {
        if let Some(mode) = self.mode {
            record.set_mode(mode);
        }
        if let Some(level) = self.estimated_level {
            record.set_estimated_level(level);
        }
        if let Some(level) = self.auto_level {
            record.set_auto_level(level);
        }
        if let Some(level) = self.manual_level {
            record.set_manual_level(level);
        }
        if let Some(step) = self.max_step {
            record.set_max_step(step);
        }
        if let Some(effects) = self.effects {
            record.set_toggles(effects);
        }

        // Opponents first so the damage-given cap sees them.
        for &id in &self.encountered {
            record.record_opponent(CreatureId(id as u64));
        }
        if let Some(given) = self.damage_given {
            record.add_damage_given(given.max(0.0));
        }
        if let Some(taken) = self.damage_taken {
            record.add_damage_taken(taken.max(0.0));
        }
    }
}

impl StoredPlayer {
    pub fn capture(player: &PlayerRecord) -> Self {
        let categories = player
            .records()
            .map(|r| (r.category().name.to_string(), StoredDifficulty::capture(r)))
            .collect();
        Self { categories }
    }

    /// Build a fully populated record: defaults first, stored values on top
    pub fn restore(&self, id: PlayerId, defaults: &RecordDefaults) -> PlayerRecord {
        let mut player = PlayerRecord::with_defaults(id, defaults);
        for (name, stored) in &self.categories {
            match category_by_name(name) {
                Some(category) => stored.apply_to(player.record_mut(category)),
                None => {
                    tracing::warn!("Ignoring stored difficulty for unknown category {:?}", name)
                }
            }
        }
        player
    }
}
