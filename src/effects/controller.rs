//! Effect controller - applies a player's level in use to combat outcomes
//!
//! Damage, experience and loot are returned scaled. Creature attributes are
//! written through `CreatureAttributes`; every apply has a matching reset
//! that restores the category default.

use std::sync::Arc;

use crate::combat::events::{category_of, Actor, DeathEvent, TargetEvent};
use crate::combat::exchange::Exchange;
use crate::core::types::{ItemStack, PlayerId};
use crate::creature::{category, CategoryId};
use crate::effects::attributes::{CreatureAttributes, SPEED_MODIFIER_ID};
use crate::effects::profile::EffectProfile;
use crate::registry::PlayerRegistry;

/// What a targeting event did to the creature
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetOutcome {
    /// Scaled for this player at this level
    Applied { player: PlayerId, level: f64 },
    /// Reverted to category defaults
    Reset,
    /// Creature is not in a tracked category
    Untracked,
}

/// Experience and drops after scaling
#[derive(Debug, Clone, PartialEq)]
pub struct DeathOutcome {
    pub experience: u32,
    pub drops: Vec<ItemStack>,
}

pub struct EffectController {
    registry: Arc<PlayerRegistry>,
}

impl EffectController {
    pub fn new(registry: Arc<PlayerRegistry>) -> Self {
        Self { registry }
    }

    /// The player's profile against a category; `None` if not registered
    pub fn profile(&self, player: PlayerId, category: CategoryId) -> Option<EffectProfile> {
        self.registry
            .with_record(player, category, |record| EffectProfile::from_record(record))
    }

    /// Scale a classified hit; unclassified or unregistered hits pass through
    pub fn scale_damage(&self, exchange: &Exchange, raw: f64) -> f64 {
        match *exchange {
            Exchange::PlayerDealtDamage {
                player, category, ..
            } => self
                .profile(player, category)
                .map_or(raw, |profile| profile.damage_dealt(raw)),
            Exchange::PlayerReceivedDamage {
                player, category, ..
            } => self
                .profile(player, category)
                .map_or(raw, |profile| profile.damage_taken(raw)),
            Exchange::Neither => raw,
        }
    }

    /// Handle a creature acquiring or losing a target
    pub fn on_target(
        &self,
        event: &TargetEvent,
        attributes: &mut impl CreatureAttributes,
    ) -> TargetOutcome {
        let Some(category_id) = category_of(&event.creature) else {
            return TargetOutcome::Untracked;
        };

        if !event.is_target_lost() {
            if let Some(player) = event.targeted_player() {
                if let Some(profile) = self.profile(player, category_id) {
                    Self::apply_profile(&profile, category_id, attributes);
                    return TargetOutcome::Applied {
                        player,
                        level: profile.level,
                    };
                }
            }
        }

        Self::reset_all(category_id, attributes);
        TargetOutcome::Reset
    }

    /// Apply every attribute effect of `profile`
    ///
    /// Attributes the profile leaves alone are reset, so a previous target's
    /// adjustment never carries over.
    pub fn apply_profile(
        profile: &EffectProfile,
        category_id: CategoryId,
        attributes: &mut impl CreatureAttributes,
    ) {
        Self::apply_speed(profile, attributes);
        Self::apply_knockback(profile, category_id, attributes);
        Self::apply_follow_range(profile, category_id, attributes);
    }

    pub fn apply_speed(profile: &EffectProfile, attributes: &mut impl CreatureAttributes) {
        match profile.speed_modifier() {
            Some(amount) => attributes.set_speed_modifier(SPEED_MODIFIER_ID, amount),
            None => Self::reset_speed(attributes),
        }
    }

    pub fn reset_speed(attributes: &mut impl CreatureAttributes) {
        attributes.remove_speed_modifier(SPEED_MODIFIER_ID);
    }

    pub fn apply_knockback(
        profile: &EffectProfile,
        category_id: CategoryId,
        attributes: &mut impl CreatureAttributes,
    ) {
        let default_resistance = category(category_id).default_knockback_resistance;
        match profile.knockback_resistance(default_resistance) {
            Some(value) => attributes.set_knockback_resistance(value),
            None => Self::reset_knockback(category_id, attributes),
        }
    }

    pub fn reset_knockback(category_id: CategoryId, attributes: &mut impl CreatureAttributes) {
        attributes.set_knockback_resistance(category(category_id).default_knockback_resistance);
    }

    pub fn apply_follow_range(
        profile: &EffectProfile,
        category_id: CategoryId,
        attributes: &mut impl CreatureAttributes,
    ) {
        let default_range = category(category_id).default_follow_range;
        match profile.follow_range(default_range) {
            Some(range) => attributes.set_follow_range(range),
            None => Self::reset_follow_range(category_id, attributes),
        }
    }

    pub fn reset_follow_range(category_id: CategoryId, attributes: &mut impl CreatureAttributes) {
        attributes.set_follow_range(category(category_id).default_follow_range);
    }

    pub fn reset_all(category_id: CategoryId, attributes: &mut impl CreatureAttributes) {
        Self::reset_speed(attributes);
        Self::reset_knockback(category_id, attributes);
        Self::reset_follow_range(category_id, attributes);
    }

    pub fn scale_experience(&self, player: PlayerId, category: CategoryId, experience: u32) -> u32 {
        self.profile(player, category)
            .map_or(experience, |profile| profile.experience(experience))
    }

    pub fn scale_loot(&self, player: PlayerId, category: CategoryId, drops: &mut [ItemStack]) {
        if let Some(profile) = self.profile(player, category) {
            profile.loot(drops);
        }
    }

    /// Scale rewards for a creature killed by a registered player
    pub fn on_death(&self, event: &DeathEvent) -> DeathOutcome {
        let mut outcome = DeathOutcome {
            experience: event.experience,
            drops: event.drops.clone(),
        };

        let killer = match &event.killer {
            Some(Actor::Player(player)) => player.id,
            _ => return outcome,
        };
        let Some(category_id) = category_of(&event.victim) else {
            return outcome;
        };

        if let Some(profile) = self.profile(killer, category_id) {
            outcome.experience = profile.experience(outcome.experience);
            profile.loot(&mut outcome.drops);
        }
        outcome
    }
}
