//! Combat monitor - feeds difficulty accumulators from classified hits
//!
//! Only AUTO records are fed. MANUAL and DISABLED records keep whatever they
//! held when they left AUTO. The monitor never touches levels.

use std::sync::Arc;

use crate::combat::exchange::Exchange;
use crate::registry::PlayerRegistry;

pub struct CombatMonitor {
    registry: Arc<PlayerRegistry>,
}

impl CombatMonitor {
    pub fn new(registry: Arc<PlayerRegistry>) -> Self {
        Self { registry }
    }

    /// Record one classified hit of `amount` raw damage
    ///
    /// Returns true if an accumulator was updated. Negative or non-finite
    /// amounts are dropped here so records never see them.
    pub fn observe(&self, exchange: &Exchange, amount: f64) -> bool {
        if !(amount.is_finite() && amount >= 0.0) {
            tracing::debug!("Dropping unusable damage amount {}", amount);
            return false;
        }

        match *exchange {
            Exchange::PlayerDealtDamage {
                player,
                category,
                opponent,
            } => self
                .registry
                .with_record(player, category, |record| {
                    if !record.mode().is_observed() {
                        return false;
                    }
                    record.record_opponent(opponent);
                    record.add_damage_given(amount);
                    true
                })
                .unwrap_or(false),
            Exchange::PlayerReceivedDamage {
                player,
                category,
                opponent,
            } => self
                .registry
                .with_record(player, category, |record| {
                    if !record.mode().is_observed() {
                        return false;
                    }
                    record.record_opponent(opponent);
                    record.add_damage_taken(amount);
                    true
                })
                .unwrap_or(false),
            Exchange::Neither => false,
        }
    }
}
