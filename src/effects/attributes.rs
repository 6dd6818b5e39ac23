//! Host-side creature attributes the effect controller adjusts

use ahash::AHashMap;
use uuid::Uuid;

use crate::creature::{category, CategoryId};

/// Stable key of the movement-speed modifier, so reapplying replaces it
pub const SPEED_MODIFIER_ID: Uuid = Uuid::from_u128(0x6d1f_3c8e_2a47_4b90_9e15_d7c4_0a8b_51f2);

/// Attribute access the host provides for a live creature
pub trait CreatureAttributes {
    /// Add or replace the additive speed modifier with this id
    fn set_speed_modifier(&mut self, id: Uuid, amount: f64);
    fn remove_speed_modifier(&mut self, id: Uuid);
    fn set_knockback_resistance(&mut self, value: f64);
    fn set_follow_range(&mut self, value: f64);
}

/// Plain in-memory attributes, for hosts without their own and for tests
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryAttributes {
    pub speed_modifiers: AHashMap<Uuid, f64>,
    pub knockback_resistance: f64,
    pub follow_range: f64,
}

impl MemoryAttributes {
    /// Attributes as a freshly spawned creature of `category` has them
    pub fn spawned(category_id: CategoryId) -> Self {
        let def = category(category_id);
        Self {
            speed_modifiers: AHashMap::new(),
            knockback_resistance: def.default_knockback_resistance,
            follow_range: def.default_follow_range,
        }
    }

    /// Sum of all additive speed modifiers
    pub fn speed_bonus(&self) -> f64 {
        self.speed_modifiers.values().sum()
    }
}

impl CreatureAttributes for MemoryAttributes {
    fn set_speed_modifier(&mut self, id: Uuid, amount: f64) {
        self.speed_modifiers.insert(id, amount);
    }

    fn remove_speed_modifier(&mut self, id: Uuid) {
        self.speed_modifiers.remove(&id);
    }

    fn set_knockback_resistance(&mut self, value: f64) {
        self.knockback_resistance = value;
    }

    fn set_follow_range(&mut self, value: f64) {
        self.follow_range = value;
    }
}
