//! Player registry - shared directory of online players
//!
//! The registry is constructed explicitly and shared through an `Arc` with the
//! monitor, analyzer, effect controller and admin commands. The map lock is
//! only held long enough to clone a player's handle; record mutation locks
//! that single player.

pub mod player;

pub use player::PlayerRecord;

use ahash::AHashMap;
use parking_lot::{Mutex, RwLock};
use std::collections::hash_map::Entry;
use std::sync::Arc;

use crate::core::config::RecordDefaults;
use crate::core::types::PlayerId;
use crate::creature::CategoryId;
use crate::difficulty::DifficultyRecord;

/// Handle to one player's records, lockable from any thread
pub type SharedPlayer = Arc<Mutex<PlayerRecord>>;

pub struct PlayerRegistry {
    players: RwLock<AHashMap<PlayerId, SharedPlayer>>,
    defaults: RecordDefaults,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::with_defaults(RecordDefaults::default())
    }

    /// Registry whose lazily created players start from `defaults`
    pub fn with_defaults(defaults: RecordDefaults) -> Self {
        Self {
            players: RwLock::new(AHashMap::new()),
            defaults,
        }
    }

    pub fn defaults(&self) -> &RecordDefaults {
        &self.defaults
    }

    pub fn get(&self, id: PlayerId) -> Option<SharedPlayer> {
        self.players.read().get(&id).cloned()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.read().contains_key(&id)
    }

    /// Fetch a player, creating a default record on first access
    pub fn get_or_create(&self, id: PlayerId) -> SharedPlayer {
        if let Some(existing) = self.get(id) {
            return existing;
        }
        let mut players = self.players.write();
        players
            .entry(id)
            .or_insert_with(|| {
                Arc::new(Mutex::new(PlayerRecord::with_defaults(id, &self.defaults)))
            })
            .clone()
    }

    /// Register an existing handle, replacing any previous one for the same id
    ///
    /// Keeps handle identity, so clones held elsewhere stay attached.
    pub fn insert_shared(&self, handle: SharedPlayer) -> Option<SharedPlayer> {
        let id = handle.lock().id();
        self.players.write().insert(id, handle)
    }

    /// Register a player record unless one is already registered for its id
    ///
    /// Check and insert happen under one write lock. Returns the registered
    /// handle and whether `record` was the one inserted.
    pub fn insert_if_absent(&self, record: PlayerRecord) -> (SharedPlayer, bool) {
        let mut players = self.players.write();
        match players.entry(record.id()) {
            Entry::Occupied(existing) => (existing.get().clone(), false),
            Entry::Vacant(slot) => (slot.insert(Arc::new(Mutex::new(record))).clone(), true),
        }
    }

    /// Register a player record, replacing any previous one for the same id
    pub fn insert(&self, record: PlayerRecord) -> Option<SharedPlayer> {
        let id = record.id();
        self.players.write().insert(id, Arc::new(Mutex::new(record)))
    }

    pub fn remove(&self, id: PlayerId) -> Option<SharedPlayer> {
        self.players.write().remove(&id)
    }

    /// Run `f` with the player's record locked; `None` if not registered
    pub fn with_player<R>(
        &self,
        id: PlayerId,
        f: impl FnOnce(&mut PlayerRecord) -> R,
    ) -> Option<R> {
        let player = self.get(id)?;
        let mut guard = player.lock();
        Some(f(&mut guard))
    }

    /// Run `f` with one difficulty record locked; `None` if not registered
    pub fn with_record<R>(
        &self,
        id: PlayerId,
        category: CategoryId,
        f: impl FnOnce(&mut DifficultyRecord) -> R,
    ) -> Option<R> {
        self.with_player(id, |player| f(player.record_mut(category)))
    }

    /// Handles to every registered player at this instant
    pub fn snapshot(&self) -> Vec<SharedPlayer> {
        self.players.read().values().cloned().collect()
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.read().keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.players.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.read().is_empty()
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
