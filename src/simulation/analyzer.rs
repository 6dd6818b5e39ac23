//! Performance analyzer - periodic re-estimation of AUTO records
//!
//! Decoupled from individual hits: a single event can only change
//! accumulators, and applied difficulty moves only here, by at most
//! `max_step` per pass.
//!
//! Uses rayon across players once the registry is large enough.

use rayon::prelude::*;
use std::sync::Arc;

use crate::core::config::{AnalysisConfig, EstimateConfig};
use crate::registry::{PlayerRegistry, SharedPlayer};

/// Summary of one analysis pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    pub players: usize,
    /// AUTO records that were re-estimated and smoothed
    pub records_updated: usize,
    /// AUTO records still under the encounter threshold
    pub records_below_threshold: usize,
}

impl AnalysisReport {
    fn merge(self, other: Self) -> Self {
        Self {
            players: self.players + other.players,
            records_updated: self.records_updated + other.records_updated,
            records_below_threshold: self.records_below_threshold + other.records_below_threshold,
        }
    }
}

pub struct PerformanceAnalyzer {
    registry: Arc<PlayerRegistry>,
    estimate: EstimateConfig,
    parallel_threshold: usize,
}

impl PerformanceAnalyzer {
    pub fn new(
        registry: Arc<PlayerRegistry>,
        estimate: EstimateConfig,
        analysis: &AnalysisConfig,
    ) -> Self {
        Self {
            registry,
            estimate,
            parallel_threshold: analysis.parallel_threshold,
        }
    }

    /// Re-estimate and smooth every AUTO record of every registered player
    ///
    /// Estimate first, then smoothing, so smoothing sees the fresh estimate.
    /// MANUAL and DISABLED records are left untouched.
    pub fn run_analysis_pass(&self) -> AnalysisReport {
        let players = self.registry.snapshot();

        let report = if players.len() >= self.parallel_threshold {
            players
                .par_iter()
                .map(|player| self.analyze_player(player))
                .reduce(AnalysisReport::default, AnalysisReport::merge)
        } else {
            players
                .iter()
                .map(|player| self.analyze_player(player))
                .fold(AnalysisReport::default(), AnalysisReport::merge)
        };

        tracing::debug!(
            "Analysis pass: {} players, {} records updated, {} below threshold",
            report.players,
            report.records_updated,
            report.records_below_threshold
        );
        report
    }

    fn analyze_player(&self, player: &SharedPlayer) -> AnalysisReport {
        let mut report = AnalysisReport {
            players: 1,
            ..Default::default()
        };

        let mut player = player.lock();
        for record in player.records_mut().filter(|r| r.mode().is_observed()) {
            if !record.update_estimate(&self.estimate) {
                report.records_below_threshold += 1;
            }
            record.smooth_auto_level();
            report.records_updated += 1;
        }
        report
    }
}
