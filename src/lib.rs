//! Dynamic Difficulty - per-player, per-creature adaptive difficulty
//!
//! Watches how each player fares against each creature category, estimates
//! a skill level from it, and scales damage, creature behaviour and rewards
//! to match.

pub mod combat;
pub mod command;
pub mod core;
pub mod creature;
pub mod difficulty;
pub mod effects;
pub mod persistence;
pub mod registry;
pub mod service;
pub mod simulation;

pub use crate::core::{DifficultyConfig, DifficultyError, Result};
pub use crate::service::DifficultyService;
