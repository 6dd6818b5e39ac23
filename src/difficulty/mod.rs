//! Per-player, per-category difficulty state and its algorithms

pub mod level;
pub mod mode;
pub mod record;
pub mod toggles;

pub use level::{clamp_level, level_ratio, Clamped, MAX_LEVEL, MIN_LEVEL, NEUTRAL_LEVEL};
pub use mode::Mode;
pub use record::DifficultyRecord;
pub use toggles::{Effect, EffectToggles};
