//! One-shot classification of a damage event
//!
//! Decides once which side is the player and which is a tracked creature, so
//! the monitor and the effect controller work from the same answer.

use crate::combat::events::{category_of, Actor, CreatureActor, DamageEvent, PlayerActor};
use crate::core::types::{CreatureId, PlayerId};
use crate::creature::CategoryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    PlayerDealtDamage {
        player: PlayerId,
        category: CategoryId,
        opponent: CreatureId,
    },
    PlayerReceivedDamage {
        player: PlayerId,
        category: CategoryId,
        opponent: CreatureId,
    },
    /// Not a scored player-versus-tracked-creature hit
    Neither,
}

impl Exchange {
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Exchange::PlayerDealtDamage { player, .. }
            | Exchange::PlayerReceivedDamage { player, .. } => Some(*player),
            Exchange::Neither => None,
        }
    }

    pub fn category(&self) -> Option<CategoryId> {
        match self {
            Exchange::PlayerDealtDamage { category, .. }
            | Exchange::PlayerReceivedDamage { category, .. } => Some(*category),
            Exchange::Neither => None,
        }
    }
}

/// Classify a damage event
///
/// Hits landing inside either side's invulnerability window, hits involving a
/// player in an unscored game mode, and hits from or on untracked creatures
/// all classify as `Neither`.
pub fn classify(event: &DamageEvent) -> Exchange {
    match (&event.attacker, &event.defender) {
        (Actor::Player(player), Actor::Creature(creature)) => {
            match scored_pair(player, creature) {
                Some((player, category, opponent)) => Exchange::PlayerDealtDamage {
                    player,
                    category,
                    opponent,
                },
                None => Exchange::Neither,
            }
        }
        (Actor::Creature(creature), Actor::Player(player)) => {
            match scored_pair(player, creature) {
                Some((player, category, opponent)) => Exchange::PlayerReceivedDamage {
                    player,
                    category,
                    opponent,
                },
                None => Exchange::Neither,
            }
        }
        _ => Exchange::Neither,
    }
}

fn scored_pair(
    player: &PlayerActor,
    creature: &CreatureActor,
) -> Option<(PlayerId, CategoryId, CreatureId)> {
    if player.invulnerable || creature.invulnerable || !player.game_mode.is_scored() {
        return None;
    }
    let category = category_of(creature)?;
    Some((player.id, category, creature.id))
}
