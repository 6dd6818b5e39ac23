//! Effect formulas for one level and toggle set
//!
//! With p = level / 100, above 100 is harder for the player and below 100 is
//! easier, for every effect. A disabled effect passes its input through.

use crate::core::types::ItemStack;
use crate::difficulty::{level_ratio, DifficultyRecord, Effect, EffectToggles, NEUTRAL_LEVEL};

/// Round half up: add 0.5, then floor
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// The level and toggles effects are computed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectProfile {
    pub level: f64,
    pub toggles: EffectToggles,
}

impl EffectProfile {
    pub fn new(level: f64, toggles: EffectToggles) -> Self {
        Self { level, toggles }
    }

    /// Level 100; every effect resolves to its unmodified value
    pub fn neutral() -> Self {
        Self::new(NEUTRAL_LEVEL, EffectToggles::default())
    }

    pub fn from_record(record: &DifficultyRecord) -> Self {
        Self::new(record.level_in_use(), record.toggles())
    }

    fn ratio(&self) -> f64 {
        level_ratio(self.level)
    }

    fn is_harder(&self) -> bool {
        self.level > NEUTRAL_LEVEL
    }

    fn enabled(&self, effect: Effect) -> bool {
        self.toggles.is_enabled(effect)
    }

    /// Damage the player deals; a stronger player hits softer
    pub fn damage_dealt(&self, raw: f64) -> f64 {
        if !self.enabled(Effect::DamageDealt) {
            return raw;
        }
        round_half_up(raw / self.ratio())
    }

    /// Damage the player takes; a stronger player is hit harder
    pub fn damage_taken(&self, raw: f64) -> f64 {
        if !self.enabled(Effect::DamageTaken) {
            return raw;
        }
        round_half_up(raw * self.ratio())
    }

    /// Additive movement-speed modifier, or `None` when speed is untouched
    pub fn speed_modifier(&self) -> Option<f64> {
        self.enabled(Effect::Speed).then(|| (self.ratio() - 1.0) / 2.0)
    }

    /// Knockback resistance, only above the neutral level
    ///
    /// The bonus `(p - 1) / 2` is added on top of the category's own
    /// resistance and capped at 1.0, so a harder creature never ends up
    /// easier to knock back than it spawned.
    pub fn knockback_resistance(&self, default_resistance: f64) -> Option<f64> {
        (self.enabled(Effect::Knockback) && self.is_harder())
            .then(|| (default_resistance + (self.ratio() - 1.0) / 2.0).min(1.0))
    }

    /// Follow range, only above the neutral level
    pub fn follow_range(&self, default_range: f64) -> Option<f64> {
        (self.enabled(Effect::AggroRange) && self.is_harder()).then(|| default_range * self.ratio())
    }

    /// Experience reward, only increased above the neutral level
    pub fn experience(&self, xp: u32) -> u32 {
        if !(self.enabled(Effect::Experience) && self.is_harder()) {
            return xp;
        }
        round_half_up(xp as f64 * self.ratio()) as u32
    }

    /// Scale each drop's quantity, only above the neutral level
    pub fn loot(&self, drops: &mut [ItemStack]) {
        if !(self.enabled(Effect::Loot) && self.is_harder()) {
            return;
        }
        let ratio = self.ratio();
        for stack in drops {
            stack.quantity = round_half_up(stack.quantity as f64 * ratio) as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(level: f64) -> EffectProfile {
        EffectProfile::new(level, EffectToggles::default())
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(7.0), 7.0);
    }

    #[test]
    fn test_damage_direction() {
        let hard = at(200.0);
        assert_eq!(hard.damage_taken(2.0), 4.0);
        assert_eq!(hard.damage_dealt(4.0), 2.0);

        let easy = at(50.0);
        assert_eq!(easy.damage_taken(4.0), 2.0);
        assert_eq!(easy.damage_dealt(4.0), 8.0);
    }

    #[test]
    fn test_neutral_is_identity() {
        let neutral = EffectProfile::neutral();
        assert_eq!(neutral.damage_taken(5.0), 5.0);
        assert_eq!(neutral.damage_dealt(5.0), 5.0);
        assert_eq!(neutral.speed_modifier(), Some(0.0));
        assert_eq!(neutral.knockback_resistance(0.0), None);
        assert_eq!(neutral.follow_range(35.0), None);
        assert_eq!(neutral.experience(10), 10);
    }

    #[test]
    fn test_speed_both_directions() {
        assert_eq!(at(200.0).speed_modifier(), Some(0.5));
        assert_eq!(at(50.0).speed_modifier(), Some(-0.25));
    }

    #[test]
    fn test_knockback_and_range_only_when_harder() {
        assert_eq!(at(150.0).knockback_resistance(0.0), Some(0.25));
        assert_eq!(at(80.0).knockback_resistance(0.0), None);
        assert_eq!(at(150.0).follow_range(16.0), Some(24.0));
        assert_eq!(at(80.0).follow_range(16.0), None);
    }

    #[test]
    fn test_knockback_builds_on_category_default() {
        let hoglin = at(150.0).knockback_resistance(0.6).unwrap();
        assert!((hoglin - 0.85).abs() < 1e-9);
        assert_eq!(at(150.0).knockback_resistance(0.75), Some(1.0));
        let barely = at(101.0).knockback_resistance(0.75).unwrap();
        assert!(barely > 0.75 && barely < 0.76);
        assert_eq!(at(80.0).knockback_resistance(0.75), None);
    }

    #[test]
    fn test_rewards_only_increase() {
        assert_eq!(at(150.0).experience(5), 8);
        assert_eq!(at(60.0).experience(5), 5);

        let mut drops = vec![ItemStack::new("bone", 3), ItemStack::new("arrow", 1)];
        at(150.0).loot(&mut drops);
        assert_eq!(drops[0].quantity, 5);
        assert_eq!(drops[1].quantity, 2);

        let mut drops = vec![ItemStack::new("bone", 3)];
        at(60.0).loot(&mut drops);
        assert_eq!(drops[0].quantity, 3);
    }

    #[test]
    fn test_loot_toggle_is_independent() {
        let mut toggles = EffectToggles::default();
        toggles.set(Effect::Loot, false);
        let profile = EffectProfile::new(200.0, toggles);

        let mut drops = vec![ItemStack::new("rotten_flesh", 2)];
        profile.loot(&mut drops);
        assert_eq!(drops[0].quantity, 2);
        assert_eq!(profile.experience(10), 20);
        assert_eq!(profile.damage_taken(2.0), 4.0);
        assert_eq!(profile.speed_modifier(), Some(0.5));
    }

    #[test]
    fn test_every_toggle_passes_through() {
        let profile = EffectProfile::new(200.0, EffectToggles::all_disabled());
        assert_eq!(profile.damage_dealt(3.0), 3.0);
        assert_eq!(profile.damage_taken(3.0), 3.0);
        assert_eq!(profile.speed_modifier(), None);
        assert_eq!(profile.knockback_resistance(0.6), None);
        assert_eq!(profile.follow_range(16.0), None);
        assert_eq!(profile.experience(7), 7);
    }
}
