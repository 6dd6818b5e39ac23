//! Persistence collaborator - loads players at login, saves them at logout
//!
//! A store must always hand back a fully populated `PlayerRecord`: defaults
//! merged with whatever overrides it holds.

pub mod memory;
pub mod stored;
pub mod toml_store;

pub use memory::MemoryStore;
pub use stored::{StoredDifficulty, StoredPlayer};
pub use toml_store::TomlStore;

use crate::core::config::RecordDefaults;
use crate::core::error::Result;
use crate::core::types::PlayerId;
use crate::registry::PlayerRecord;

pub trait PlayerStore: Send + Sync {
    /// Load a player's records, or defaults if nothing is stored
    fn load(&self, id: PlayerId, defaults: &RecordDefaults) -> Result<PlayerRecord>;

    /// Persist a player's full record set
    fn save(&self, record: &PlayerRecord) -> Result<()>;
}
