//! Per-effect enable flags

use serde::{Deserialize, Serialize};

/// One independently toggleable difficulty effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Damage the player deals to the category
    DamageDealt,
    /// Damage the player takes from the category
    DamageTaken,
    Speed,
    Knockback,
    AggroRange,
    Experience,
    Loot,
}

impl Effect {
    /// All effects
    pub fn all() -> &'static [Effect] {
        &[
            Effect::DamageDealt,
            Effect::DamageTaken,
            Effect::Speed,
            Effect::Knockback,
            Effect::AggroRange,
            Effect::Experience,
            Effect::Loot,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Effect::DamageDealt => "damage_dealt",
            Effect::DamageTaken => "damage_taken",
            Effect::Speed => "speed",
            Effect::Knockback => "knockback",
            Effect::AggroRange => "aggro_range",
            Effect::Experience => "experience",
            Effect::Loot => "loot",
        }
    }

    pub fn from_name(name: &str) -> Option<Effect> {
        Effect::all()
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Enable flags for every effect (all on by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectToggles {
    pub damage_dealt: bool,
    pub damage_taken: bool,
    pub speed: bool,
    pub knockback: bool,
    pub aggro_range: bool,
    pub experience: bool,
    pub loot: bool,
}

impl Default for EffectToggles {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl EffectToggles {
    pub fn all_enabled() -> Self {
        Self::uniform(true)
    }

    pub fn all_disabled() -> Self {
        Self::uniform(false)
    }

    fn uniform(enabled: bool) -> Self {
        Self {
            damage_dealt: enabled,
            damage_taken: enabled,
            speed: enabled,
            knockback: enabled,
            aggro_range: enabled,
            experience: enabled,
            loot: enabled,
        }
    }

    pub fn is_enabled(&self, effect: Effect) -> bool {
        match effect {
            Effect::DamageDealt => self.damage_dealt,
            Effect::DamageTaken => self.damage_taken,
            Effect::Speed => self.speed,
            Effect::Knockback => self.knockback,
            Effect::AggroRange => self.aggro_range,
            Effect::Experience => self.experience,
            Effect::Loot => self.loot,
        }
    }

    pub fn set(&mut self, effect: Effect, enabled: bool) {
        let flag = match effect {
            Effect::DamageDealt => &mut self.damage_dealt,
            Effect::DamageTaken => &mut self.damage_taken,
            Effect::Speed => &mut self.speed,
            Effect::Knockback => &mut self.knockback,
            Effect::AggroRange => &mut self.aggro_range,
            Effect::Experience => &mut self.experience,
            Effect::Loot => &mut self.loot,
        };
        *flag = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_all_enabled() {
        let toggles = EffectToggles::default();
        assert!(Effect::all().iter().all(|e| toggles.is_enabled(*e)));
    }

    #[test]
    fn test_set_touches_only_one_flag() {
        for &effect in Effect::all() {
            let mut toggles = EffectToggles::default();
            toggles.set(effect, false);
            for &other in Effect::all() {
                assert_eq!(toggles.is_enabled(other), other != effect);
            }
        }
    }

    #[test]
    fn test_effect_names_round_trip() {
        for &effect in Effect::all() {
            assert_eq!(Effect::from_name(effect.name()), Some(effect));
        }
        assert_eq!(Effect::from_name("LOOT"), Some(Effect::Loot));
        assert_eq!(Effect::from_name("gravity"), None);
    }
}
