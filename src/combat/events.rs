//! Host events the difficulty engine consumes
//!
//! The host engine translates its own entity objects into these plain
//! descriptions before delivering them. Projectiles and other indirect damage
//! sources must already be resolved to the creature or player responsible.

use serde::{Deserialize, Serialize};

use crate::core::types::{CreatureId, ItemStack, PlayerId};
use crate::creature::{category_by_name, CategoryId};

/// Player game mode; only some modes produce meaningful combat samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Survival,
    Adventure,
    Creative,
    Spectator,
}

impl GameMode {
    /// Does combat in this mode count toward the skill estimate?
    pub fn is_scored(&self) -> bool {
        matches!(self, GameMode::Survival | GameMode::Adventure)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerActor {
    pub id: PlayerId,
    pub game_mode: GameMode,
    /// Inside the post-hit invulnerability window
    pub invulnerable: bool,
}

impl PlayerActor {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            game_mode: GameMode::Survival,
            invulnerable: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureActor {
    pub id: CreatureId,
    /// Host entity kind, e.g. `zombie` or `minecraft:zombie`
    pub kind: String,
    /// Inside the post-hit invulnerability window
    pub invulnerable: bool,
}

impl CreatureActor {
    pub fn new(id: CreatureId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            invulnerable: false,
        }
    }
}

/// Resolve a live creature to its tracked category, if any
pub fn category_of(creature: &CreatureActor) -> Option<CategoryId> {
    category_by_name(&creature.kind)
}

/// Either side of a combat event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    Player(PlayerActor),
    Creature(CreatureActor),
    /// Environment, untracked entities, anything else
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DamageEvent {
    pub attacker: Actor,
    pub defender: Actor,
    pub amount: f64,
}

/// Why a creature's target changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetReason {
    ClosestPlayer,
    RetaliatedAgainst,
    TargetDied,
    ForgotTarget,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TargetEvent {
    pub creature: CreatureActor,
    /// New target; `None` means the creature lost its target
    pub target: Option<Actor>,
    pub reason: TargetReason,
}

impl TargetEvent {
    /// The player being targeted, if the new target is a player
    pub fn targeted_player(&self) -> Option<PlayerId> {
        match &self.target {
            Some(Actor::Player(player)) => Some(player.id),
            _ => None,
        }
    }

    /// True when the creature is left without a target
    ///
    /// Only the new target decides this; `reason` describes why the old one
    /// was dropped, and a creature whose victim died may already be chasing
    /// someone else.
    pub fn is_target_lost(&self) -> bool {
        self.target.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeathEvent {
    pub victim: CreatureActor,
    pub killer: Option<Actor>,
    pub experience: u32,
    pub drops: Vec<ItemStack>,
}
