//! In-process store, used by tests and the simulation binary

use ahash::AHashMap;
use parking_lot::Mutex;

use crate::core::config::RecordDefaults;
use crate::core::error::Result;
use crate::core::types::PlayerId;
use crate::persistence::{PlayerStore, StoredPlayer};
use crate::registry::PlayerRecord;

/// Keeps saved players in memory, in the same shape a file store writes
#[derive(Default)]
pub struct MemoryStore {
    saved: Mutex<AHashMap<PlayerId, StoredPlayer>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.saved.lock().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.saved.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.lock().is_empty()
    }
}

impl PlayerStore for MemoryStore {
    fn load(&self, id: PlayerId, defaults: &RecordDefaults) -> Result<PlayerRecord> {
        let saved = self.saved.lock();
        Ok(match saved.get(&id) {
            Some(stored) => stored.restore(id, defaults),
            None => PlayerRecord::with_defaults(id, defaults),
        })
    }

    fn save(&self, record: &PlayerRecord) -> Result<()> {
        self.saved
            .lock()
            .insert(record.id(), StoredPlayer::capture(record));
        Ok(())
    }
}
