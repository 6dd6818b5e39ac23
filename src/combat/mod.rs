//! Combat observation: host events, hit classification and the monitor
//! that turns scored hits into difficulty samples.

pub mod events;
pub mod exchange;
pub mod monitor;

pub use events::{
    category_of, Actor, CreatureActor, DamageEvent, DeathEvent, GameMode, PlayerActor,
    TargetEvent, TargetReason,
};
pub use exchange::{classify, Exchange};
pub use monitor::CombatMonitor;
