//! Player record - one difficulty record per creature category

use crate::core::config::RecordDefaults;
use crate::core::types::PlayerId;
use crate::creature::{all_categories, CategoryId};
use crate::difficulty::DifficultyRecord;

/// A player and their full set of difficulty records
///
/// Always fully populated: every category has a record from construction on.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    id: PlayerId,
    /// Indexed by `CategoryId` discriminant
    records: Vec<DifficultyRecord>,
}

impl PlayerRecord {
    pub fn new(id: PlayerId) -> Self {
        Self::with_defaults(id, &RecordDefaults::default())
    }

    pub fn with_defaults(id: PlayerId, defaults: &RecordDefaults) -> Self {
        let records = all_categories()
            .map(|category| DifficultyRecord::with_defaults(category, defaults))
            .collect();
        Self { id, records }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn record(&self, category: CategoryId) -> &DifficultyRecord {
        &self.records[category as usize]
    }

    pub fn record_mut(&mut self, category: CategoryId) -> &mut DifficultyRecord {
        &mut self.records[category as usize]
    }

    pub fn records(&self) -> impl Iterator<Item = &DifficultyRecord> {
        self.records.iter()
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut DifficultyRecord> {
        self.records.iter_mut()
    }
}
