pub mod config;
pub mod error;
pub mod types;

pub use config::DifficultyConfig;
pub use error::{DifficultyError, Result};
pub use types::{CreatureId, ItemStack, PlayerId, Tick};
