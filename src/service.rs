//! Difficulty service - the host-facing entry point
//!
//! Owns the shared registry and wires host events to the monitor, analyzer
//! and effect controller:
//! - login / logout: load from and save to the player store
//! - damage: classify once, observe, then scale
//! - targeting and death: creature attributes and rewards
//! - server tick: periodic analysis pass

use std::sync::Arc;

use crate::combat::{classify, CombatMonitor, DamageEvent, DeathEvent, Exchange, TargetEvent};
use crate::command::AdminCommands;
use crate::core::config::DifficultyConfig;
use crate::core::error::Result;
use crate::core::types::PlayerId;
use crate::effects::{CreatureAttributes, DeathOutcome, EffectController, TargetOutcome};
use crate::persistence::{PlayerStore, TomlStore};
use crate::registry::PlayerRegistry;
use crate::simulation::{AnalysisReport, AnalysisSchedule, PerformanceAnalyzer};

pub struct DifficultyService {
    config: DifficultyConfig,
    registry: Arc<PlayerRegistry>,
    monitor: CombatMonitor,
    analyzer: PerformanceAnalyzer,
    controller: EffectController,
    schedule: AnalysisSchedule,
    store: Box<dyn PlayerStore>,
}

impl DifficultyService {
    pub fn new(config: DifficultyConfig, store: Box<dyn PlayerStore>) -> Self {
        let registry = Arc::new(PlayerRegistry::with_defaults(config.defaults.clone()));
        Self {
            monitor: CombatMonitor::new(Arc::clone(&registry)),
            analyzer: PerformanceAnalyzer::new(
                Arc::clone(&registry),
                config.estimate.clone(),
                &config.analysis,
            ),
            controller: EffectController::new(Arc::clone(&registry)),
            schedule: AnalysisSchedule::new(config.analysis.interval_ticks),
            registry,
            store,
            config,
        }
    }

    /// Service persisting players as TOML files under `config.storage.directory`
    pub fn with_toml_store(config: DifficultyConfig) -> Self {
        let store = TomlStore::new(config.storage.directory.clone());
        Self::new(config, Box::new(store))
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<PlayerRegistry> {
        &self.registry
    }

    pub fn analyzer(&self) -> &PerformanceAnalyzer {
        &self.analyzer
    }

    pub fn controller(&self) -> &EffectController {
        &self.controller
    }

    /// Admin command handle sharing this service's registry
    pub fn admin(&self) -> AdminCommands {
        AdminCommands::new(Arc::clone(&self.registry))
    }

    /// Load a player's records and register them
    ///
    /// A player who is already registered keeps their live record.
    pub fn on_login(&self, player: PlayerId) -> Result<()> {
        if self.registry.contains(player) {
            tracing::debug!("{} already registered, keeping live record", player);
            return Ok(());
        }
        let record = self.store.load(player, &self.config.defaults)?;
        let (_, inserted) = self.registry.insert_if_absent(record);
        if inserted {
            tracing::info!("Registered difficulty records for {}", player);
        } else {
            tracing::debug!("{} registered concurrently, keeping live record", player);
        }
        Ok(())
    }

    /// Unregister a player, then save their records
    ///
    /// The player leaves the registry before the save, so no command can
    /// write to the record after it is captured. If saving fails the same
    /// handle is registered again so a later save can retry.
    pub fn on_logout(&self, player: PlayerId) -> Result<()> {
        let Some(shared) = self.registry.remove(player) else {
            return Ok(());
        };

        let saved = self.store.save(&shared.lock());
        if let Err(err) = saved {
            tracing::warn!("Failed to save difficulty for {}: {}", player, err);
            self.registry.insert_shared(shared);
            return Err(err);
        }

        tracing::info!("Saved and released difficulty records for {}", player);
        Ok(())
    }

    /// Observe a hit and return the damage the host should apply
    pub fn on_damage(&self, event: &DamageEvent) -> f64 {
        let exchange = classify(event);
        if exchange == Exchange::Neither {
            return event.amount;
        }
        self.monitor.observe(&exchange, event.amount);
        self.controller.scale_damage(&exchange, event.amount)
    }

    pub fn on_target(
        &self,
        event: &TargetEvent,
        attributes: &mut impl CreatureAttributes,
    ) -> TargetOutcome {
        self.controller.on_target(event, attributes)
    }

    pub fn on_death(&self, event: &DeathEvent) -> DeathOutcome {
        self.controller.on_death(event)
    }

    /// Advance one server tick, running an analysis pass when one is due
    pub fn on_server_tick(&mut self) -> Option<AnalysisReport> {
        self.schedule
            .advance()
            .then(|| self.analyzer.run_analysis_pass())
    }

    /// Save every registered player without unregistering anyone
    ///
    /// Keeps going past failures; returns the number saved, or the last error
    /// if any save failed.
    pub fn save_all(&self) -> Result<usize> {
        let mut saved = 0;
        let mut last_error = None;
        for shared in self.registry.snapshot() {
            let player = shared.lock();
            match self.store.save(&player) {
                Ok(()) => saved += 1,
                Err(err) => {
                    tracing::warn!("Failed to save difficulty for {}: {}", player.id(), err);
                    last_error = Some(err);
                }
            }
        }
        match last_error {
            Some(err) => Err(err),
            None => Ok(saved),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{Actor, CreatureActor, PlayerActor};
    use crate::core::config::RecordDefaults;
    use crate::core::types::CreatureId;
    use crate::creature::CategoryId;
    use crate::persistence::MemoryStore;
    use crate::registry::PlayerRecord;
    use parking_lot::Mutex;

    fn service(interval_ticks: u64) -> DifficultyService {
        let mut config = DifficultyConfig::default();
        config.analysis.interval_ticks = interval_ticks;
        DifficultyService::new(config, Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_login_is_idempotent() {
        let service = service(10);
        let player = PlayerId::new();
        service.on_login(player).unwrap();
        service
            .registry()
            .with_record(player, CategoryId::Zombie, |r| r.add_damage_taken(3.0));
        service.on_login(player).unwrap();

        let taken = service
            .registry()
            .with_record(player, CategoryId::Zombie, |r| r.damage_taken())
            .unwrap();
        assert_eq!(taken, 3.0);
    }

    #[test]
    fn test_logout_unknown_player_is_noop() {
        let service = service(10);
        assert!(service.on_logout(PlayerId::new()).is_ok());
    }

    #[test]
    fn test_ignored_hit_passes_through() {
        let service = service(10);
        let player = PlayerId::new();
        service.on_login(player).unwrap();

        let mut actor = PlayerActor::new(player);
        actor.invulnerable = true;
        let event = DamageEvent {
            attacker: Actor::Creature(CreatureActor::new(CreatureId(1), "zombie")),
            defender: Actor::Player(actor),
            amount: 5.0,
        };
        assert_eq!(service.on_damage(&event), 5.0);
        let encounters = service
            .registry()
            .with_record(player, CategoryId::Zombie, |r| r.encounter_count())
            .unwrap();
        assert_eq!(encounters, 0);
    }

    /// Store that records whether the player was still registered while saving
    struct WatchingStore {
        registry: Mutex<Option<Arc<PlayerRegistry>>>,
        registered_during_save: Mutex<Vec<bool>>,
        fail: bool,
    }

    impl WatchingStore {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                registry: Mutex::new(None),
                registered_during_save: Mutex::new(Vec::new()),
                fail,
            })
        }
    }

    impl PlayerStore for Arc<WatchingStore> {
        fn load(&self, id: PlayerId, defaults: &RecordDefaults) -> Result<PlayerRecord> {
            Ok(PlayerRecord::with_defaults(id, defaults))
        }

        fn save(&self, record: &PlayerRecord) -> Result<()> {
            let registered = self
                .registry
                .lock()
                .as_ref()
                .map_or(false, |r| r.contains(record.id()));
            self.registered_during_save.lock().push(registered);
            if self.fail {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full").into());
            }
            Ok(())
        }
    }

    fn watched_service(fail: bool) -> (DifficultyService, Arc<WatchingStore>) {
        let store = WatchingStore::new(fail);
        let service =
            DifficultyService::new(DifficultyConfig::default(), Box::new(Arc::clone(&store)));
        *store.registry.lock() = Some(Arc::clone(service.registry()));
        (service, store)
    }

    #[test]
    fn test_logout_unregisters_before_saving() {
        let (service, store) = watched_service(false);
        let player = PlayerId::new();
        service.on_login(player).unwrap();

        service.on_logout(player).unwrap();
        assert_eq!(*store.registered_during_save.lock(), vec![false]);
        assert!(!service.registry().contains(player));
    }

    #[test]
    fn test_failed_logout_restores_same_handle() {
        let (service, store) = watched_service(true);
        let player = PlayerId::new();
        service.on_login(player).unwrap();
        let held = service.registry().get(player).unwrap();

        assert!(service.on_logout(player).is_err());
        assert_eq!(*store.registered_during_save.lock(), vec![false]);

        let restored = service.registry().get(player).unwrap();
        assert!(Arc::ptr_eq(&held, &restored));

        held.lock().record_mut(CategoryId::Spider).add_damage_taken(2.0);
        let taken = service
            .registry()
            .with_record(player, CategoryId::Spider, |r| r.damage_taken())
            .unwrap();
        assert_eq!(taken, 2.0);
    }

    #[test]
    fn test_tick_schedule() {
        let mut service = service(3);
        assert!(service.on_server_tick().is_none());
        assert!(service.on_server_tick().is_none());
        assert!(service.on_server_tick().is_some());
    }
}
