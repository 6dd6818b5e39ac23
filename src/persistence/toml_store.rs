//! File store - one TOML file per player
//!
//! Files live at `{directory}/{player uuid}.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::RecordDefaults;
use crate::core::error::Result;
use crate::core::types::PlayerId;
use crate::persistence::{PlayerStore, StoredPlayer};
use crate::registry::PlayerRecord;

pub struct TomlStore {
    directory: PathBuf,
}

impl TomlStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Get path to a player's file
    pub fn player_path(&self, id: PlayerId) -> PathBuf {
        self.directory.join(format!("{}.toml", id))
    }
}

impl PlayerStore for TomlStore {
    fn load(&self, id: PlayerId, defaults: &RecordDefaults) -> Result<PlayerRecord> {
        let path = self.player_path(id);
        if !path.exists() {
            tracing::debug!("No stored difficulty for {}, using defaults", id);
            return Ok(PlayerRecord::with_defaults(id, defaults));
        }

        let contents = fs::read_to_string(&path)?;
        let stored: StoredPlayer = toml::from_str(&contents)?;
        Ok(stored.restore(id, defaults))
    }

    fn save(&self, record: &PlayerRecord) -> Result<()> {
        fs::create_dir_all(&self.directory)?;

        let contents = toml::to_string_pretty(&StoredPlayer::capture(record))?;
        let path = self.player_path(record.id());
        let staging = path.with_extension("toml.tmp");

        // Write beside the target then rename, so a crash never leaves half a file.
        fs::write(&staging, contents)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }
}
