//! Difficulty record - one player's standing against one creature category
//!
//! Holds the three levels, the accumulators the combat monitor feeds, and the
//! two algorithms the analyzer runs each pass: the skill estimate and the
//! rate-limited auto level.

use ahash::AHashSet;

use crate::core::config::{EstimateConfig, RecordDefaults};
use crate::core::types::CreatureId;
use crate::creature::{category, CategoryId, CreatureCategory};
use crate::difficulty::level::{clamp_level, Clamped, NEUTRAL_LEVEL};
use crate::difficulty::mode::Mode;
use crate::difficulty::toggles::{Effect, EffectToggles};

/// Smallest allowed auto-level step
pub const MIN_MAX_STEP: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyRecord {
    category: CategoryId,
    mode: Mode,
    estimated_level: f64,
    auto_level: f64,
    manual_level: f64,
    max_step: u32,
    toggles: EffectToggles,
    damage_given: f64,
    damage_taken: f64,
    encountered: AHashSet<CreatureId>,
}

impl DifficultyRecord {
    pub fn new(category: CategoryId) -> Self {
        Self::with_defaults(category, &RecordDefaults::default())
    }

    pub fn with_defaults(category: CategoryId, defaults: &RecordDefaults) -> Self {
        Self {
            category,
            mode: defaults.mode,
            estimated_level: NEUTRAL_LEVEL,
            auto_level: NEUTRAL_LEVEL,
            manual_level: NEUTRAL_LEVEL,
            max_step: defaults.max_step.max(MIN_MAX_STEP),
            toggles: EffectToggles::default(),
            damage_given: 0.0,
            damage_taken: 0.0,
            encountered: AHashSet::new(),
        }
    }

    pub fn category_id(&self) -> CategoryId {
        self.category
    }

    pub fn category(&self) -> &'static CreatureCategory {
        category(self.category)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn estimated_level(&self) -> f64 {
        self.estimated_level
    }

    pub fn auto_level(&self) -> f64 {
        self.auto_level
    }

    pub fn manual_level(&self) -> f64 {
        self.manual_level
    }

    pub fn set_estimated_level(&mut self, level: f64) -> Clamped<f64> {
        let result = clamp_level(level);
        self.estimated_level = result.value;
        result
    }

    pub fn set_auto_level(&mut self, level: f64) -> Clamped<f64> {
        let result = clamp_level(level);
        self.auto_level = result.value;
        result
    }

    pub fn set_manual_level(&mut self, level: f64) -> Clamped<f64> {
        let result = clamp_level(level);
        self.manual_level = result.value;
        result
    }

    /// The level effects are scaled by, selected purely by mode
    pub fn level_in_use(&self) -> f64 {
        match self.mode {
            Mode::Auto => self.auto_level,
            Mode::Manual => self.manual_level,
            Mode::Disabled => NEUTRAL_LEVEL,
        }
    }

    pub fn max_step(&self) -> u32 {
        self.max_step
    }

    /// Set the per-pass auto-level step; values below 1 are raised to 1
    pub fn set_max_step(&mut self, step: i64) -> Clamped<u32> {
        let coerced = step.clamp(MIN_MAX_STEP as i64, u32::MAX as i64) as u32;
        self.max_step = coerced;
        if coerced as i64 == step {
            Clamped::exact(coerced)
        } else {
            Clamped::coerced(coerced)
        }
    }

    pub fn toggles(&self) -> EffectToggles {
        self.toggles
    }

    pub fn is_enabled(&self, effect: Effect) -> bool {
        self.toggles.is_enabled(effect)
    }

    pub fn set_effect(&mut self, effect: Effect, enabled: bool) {
        self.toggles.set(effect, enabled);
    }

    pub fn set_toggles(&mut self, toggles: EffectToggles) {
        self.toggles = toggles;
    }

    pub fn damage_given(&self) -> f64 {
        self.damage_given
    }

    pub fn damage_taken(&self) -> f64 {
        self.damage_taken
    }

    pub fn encounter_count(&self) -> usize {
        self.encountered.len()
    }

    pub fn has_encountered(&self, opponent: CreatureId) -> bool {
        self.encountered.contains(&opponent)
    }

    pub fn encountered(&self) -> impl Iterator<Item = CreatureId> + '_ {
        self.encountered.iter().copied()
    }

    /// Remember an opponent; returns true the first time it is seen
    pub fn record_opponent(&mut self, opponent: CreatureId) -> bool {
        self.encountered.insert(opponent)
    }

    /// Add damage dealt to this category
    ///
    /// The total never exceeds one full health bar per encountered opponent.
    pub fn add_damage_given(&mut self, amount: f64) {
        let cap = self.encountered.len() as f64 * self.category().max_health;
        self.damage_given = (self.damage_given + amount).min(cap);
    }

    pub fn add_damage_taken(&mut self, amount: f64) {
        self.damage_taken += amount;
    }

    pub fn clear_accumulators(&mut self) {
        self.damage_given = 0.0;
        self.damage_taken = 0.0;
        self.encountered.clear();
    }

    /// Recompute the skill estimate from the accumulators
    ///
    /// Returns false (estimate unchanged) while fewer than
    /// `config.min_encounters` distinct opponents have been seen.
    pub fn update_estimate(&mut self, config: &EstimateConfig) -> bool {
        let encounters = self.encountered.len();
        if encounters < config.min_encounters {
            return false;
        }

        let given_ratio = self.damage_given / self.category().max_health;
        let taken_ratio = self.damage_taken / config.player_max_health;
        let estimate =
            NEUTRAL_LEVEL + (given_ratio - taken_ratio) / encounters as f64 * NEUTRAL_LEVEL;

        self.set_estimated_level(estimate);
        true
    }

    /// Move the auto level toward the estimate by at most `max_step`
    pub fn smooth_auto_level(&mut self) -> f64 {
        let step = self.max_step as f64;
        let target = self.estimated_level;

        let next = if target > self.auto_level + step {
            self.auto_level + step
        } else if target < self.auto_level - step {
            self.auto_level - step
        } else {
            target
        };

        self.set_auto_level(next).value
    }

    /// One analysis step: re-estimate, then smooth toward the fresh estimate
    pub fn analyze(&mut self, config: &EstimateConfig) -> f64 {
        self.update_estimate(config);
        self.smooth_auto_level()
    }
}
