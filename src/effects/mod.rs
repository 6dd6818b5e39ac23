//! Translating a level in use into concrete combat and reward adjustments

pub mod attributes;
pub mod controller;
pub mod profile;

pub use attributes::{CreatureAttributes, MemoryAttributes, SPEED_MODIFIER_ID};
pub use controller::{DeathOutcome, EffectController, TargetOutcome};
pub use profile::{round_half_up, EffectProfile};
