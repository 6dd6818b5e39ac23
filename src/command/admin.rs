//! Administrative overrides on difficulty records
//!
//! Every command addresses one player and either one category or all of
//! them. Out-of-range numbers are clamped, and the returned `Clamped` says
//! so. A player who is not registered is `DifficultyError::PlayerNotFound`.

use serde::Serialize;
use std::sync::Arc;

use crate::core::error::{DifficultyError, Result};
use crate::core::types::PlayerId;
use crate::creature::{category_by_name, CategoryId};
use crate::difficulty::{Clamped, DifficultyRecord, Effect, EffectToggles, Mode};
use crate::registry::PlayerRegistry;

/// Which of a player's records a command touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    All,
    One(CategoryId),
}

impl CategoryScope {
    /// Parse "all" or a category name
    pub fn parse(name: &str) -> Result<Self> {
        if name.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryScope::All);
        }
        category_by_name(name)
            .map(CategoryScope::One)
            .ok_or_else(|| DifficultyError::UnknownCategory(name.to_string()))
    }

    fn includes(&self, category: CategoryId) -> bool {
        match self {
            CategoryScope::All => true,
            CategoryScope::One(only) => *only == category,
        }
    }
}

/// Read-only view of one record, for display by the command layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    pub category: CategoryId,
    pub mode: Mode,
    pub level_in_use: f64,
    pub estimated_level: f64,
    pub auto_level: f64,
    pub manual_level: f64,
    pub max_step: u32,
    pub encounters: usize,
    pub damage_given: f64,
    pub damage_taken: f64,
    pub effects: EffectToggles,
}

impl RecordSummary {
    pub fn of(record: &DifficultyRecord) -> Self {
        Self {
            category: record.category_id(),
            mode: record.mode(),
            level_in_use: record.level_in_use(),
            estimated_level: record.estimated_level(),
            auto_level: record.auto_level(),
            manual_level: record.manual_level(),
            max_step: record.max_step(),
            encounters: record.encounter_count(),
            damage_given: record.damage_given(),
            damage_taken: record.damage_taken(),
            effects: record.toggles(),
        }
    }
}

pub struct AdminCommands {
    registry: Arc<PlayerRegistry>,
}

impl AdminCommands {
    pub fn new(registry: Arc<PlayerRegistry>) -> Self {
        Self { registry }
    }

    /// Apply `f` to every record in scope; returns how many were touched
    fn for_scope<F>(&self, player: PlayerId, scope: CategoryScope, mut f: F) -> Result<usize>
    where
        F: FnMut(&mut DifficultyRecord),
    {
        self.registry
            .with_player(player, |p| {
                let mut touched = 0;
                for record in p.records_mut().filter(|r| scope.includes(r.category_id())) {
                    f(record);
                    touched += 1;
                }
                touched
            })
            .ok_or(DifficultyError::PlayerNotFound(player))
    }

    pub fn set_mode(&self, player: PlayerId, scope: CategoryScope, mode: Mode) -> Result<usize> {
        let touched = self.for_scope(player, scope, |r| r.set_mode(mode))?;
        tracing::info!(
            "Set mode {} for {} ({:?}, {} records)",
            mode.name(),
            player,
            scope,
            touched
        );
        Ok(touched)
    }

    pub fn set_manual_level(
        &self,
        player: PlayerId,
        scope: CategoryScope,
        level: f64,
    ) -> Result<Clamped<f64>> {
        let mut result = Clamped::exact(level);
        self.for_scope(player, scope, |r| result = r.set_manual_level(level))?;
        tracing::info!("Set manual level {} for {} ({:?})", result.value, player, scope);
        Ok(result)
    }

    /// Override the auto level directly; the analyzer keeps smoothing from here
    pub fn set_auto_level(
        &self,
        player: PlayerId,
        scope: CategoryScope,
        level: f64,
    ) -> Result<Clamped<f64>> {
        let mut result = Clamped::exact(level);
        self.for_scope(player, scope, |r| result = r.set_auto_level(level))?;
        tracing::info!("Set auto level {} for {} ({:?})", result.value, player, scope);
        Ok(result)
    }

    pub fn set_max_step(
        &self,
        player: PlayerId,
        scope: CategoryScope,
        step: i64,
    ) -> Result<Clamped<u32>> {
        let mut result = Clamped::exact(step.max(1) as u32);
        self.for_scope(player, scope, |r| result = r.set_max_step(step))?;
        tracing::info!("Set max step {} for {} ({:?})", result.value, player, scope);
        Ok(result)
    }

    pub fn set_effect(
        &self,
        player: PlayerId,
        scope: CategoryScope,
        effect: Effect,
        enabled: bool,
    ) -> Result<usize> {
        let touched = self.for_scope(player, scope, |r| r.set_effect(effect, enabled))?;
        tracing::info!(
            "Set {} {} for {} ({:?})",
            effect.name(),
            if enabled { "on" } else { "off" },
            player,
            scope
        );
        Ok(touched)
    }

    /// Forget accumulated damage and encounters; levels are kept
    pub fn clear_accumulators(&self, player: PlayerId, scope: CategoryScope) -> Result<usize> {
        self.for_scope(player, scope, |r| r.clear_accumulators())
    }

    pub fn describe(&self, player: PlayerId, category: CategoryId) -> Result<RecordSummary> {
        self.registry
            .with_record(player, category, |r| RecordSummary::of(r))
            .ok_or(DifficultyError::PlayerNotFound(player))
    }

    pub fn describe_all(&self, player: PlayerId) -> Result<Vec<RecordSummary>> {
        self.registry
            .with_player(player, |p| p.records().map(RecordSummary::of).collect())
            .ok_or(DifficultyError::PlayerNotFound(player))
    }
}
