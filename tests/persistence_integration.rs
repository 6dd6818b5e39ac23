//! Persistence integration tests
//!
//! A player's records must survive logout and login through the file store,
//! and a failed save must never lose the live record.

use std::fs;
use std::path::{Path, PathBuf};

use dynamic_difficulty::combat::{Actor, CreatureActor, DamageEvent, PlayerActor};
use dynamic_difficulty::command::CategoryScope;
use dynamic_difficulty::core::config::RecordDefaults;
use dynamic_difficulty::core::types::{CreatureId, PlayerId};
use dynamic_difficulty::creature::CategoryId;
use dynamic_difficulty::difficulty::{Effect, Mode};
use dynamic_difficulty::persistence::{PlayerStore, TomlStore};
use dynamic_difficulty::registry::PlayerRecord;
use dynamic_difficulty::{DifficultyConfig, DifficultyError, DifficultyService, Result};

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("dynamic-difficulty-it-{}", uuid::Uuid::new_v4()))
}

fn config_in(dir: &Path) -> DifficultyConfig {
    let mut config = DifficultyConfig::default();
    config.storage.directory = dir.to_path_buf();
    config.analysis.interval_ticks = 1;
    config
}

fn hit_spider(service: &DifficultyService, player: PlayerId, spider: u64, amount: f64) {
    service.on_damage(&DamageEvent {
        attacker: Actor::Player(PlayerActor::new(player)),
        defender: Actor::Creature(CreatureActor::new(CreatureId(spider), "spider")),
        amount,
    });
}

#[test]
fn test_records_survive_relog() {
    let dir = scratch_dir();
    let player = PlayerId::new();

    let before = {
        let mut service = DifficultyService::with_toml_store(config_in(&dir));
        service.on_login(player).unwrap();

        for spider in 1..=4 {
            hit_spider(&service, player, spider, 8.0);
        }
        service.on_server_tick();

        let admin = service.admin();
        let creeper = CategoryScope::One(CategoryId::Creeper);
        admin.set_mode(player, creeper, Mode::Manual).unwrap();
        admin.set_manual_level(player, creeper, 175.0).unwrap();
        admin
            .set_effect(player, CategoryScope::One(CategoryId::Witch), Effect::Speed, false)
            .unwrap();
        admin.set_max_step(player, CategoryScope::All, 25).unwrap();

        let before = admin.describe_all(player).unwrap();
        service.on_logout(player).unwrap();
        assert!(!service.registry().contains(player));
        before
    };

    assert!(dir.join(format!("{}.toml", player)).exists());

    let service = DifficultyService::with_toml_store(config_in(&dir));
    service.on_login(player).unwrap();
    let after = service.admin().describe_all(player).unwrap();
    assert_eq!(before, after);

    let spider = service.admin().describe(player, CategoryId::Spider).unwrap();
    assert_eq!(spider.encounters, 4);
    assert_eq!(spider.damage_given, 32.0);
    assert_eq!(spider.level_in_use, 110.0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_first_login_uses_configured_defaults() {
    let dir = scratch_dir();
    let mut config = config_in(&dir);
    config.defaults = RecordDefaults {
        mode: Mode::Disabled,
        max_step: 4,
    };
    let service = DifficultyService::with_toml_store(config);
    let player = PlayerId::new();
    service.on_login(player).unwrap();

    let summaries = service.admin().describe_all(player).unwrap();
    assert!(summaries.iter().all(|s| s.mode == Mode::Disabled && s.max_step == 4));
    assert!(!dir.exists());
}

#[test]
fn test_save_all_keeps_players_registered() {
    let dir = scratch_dir();
    let service = DifficultyService::with_toml_store(config_in(&dir));
    let players: Vec<PlayerId> = (0..3).map(|_| PlayerId::new()).collect();
    for player in &players {
        service.on_login(*player).unwrap();
    }

    assert_eq!(service.save_all().unwrap(), 3);
    for player in &players {
        assert!(service.registry().contains(*player));
        assert!(dir.join(format!("{}.toml", player)).exists());
    }

    let _ = fs::remove_dir_all(&dir);
}

/// Store whose saves always fail
struct BrokenStore;

impl PlayerStore for BrokenStore {
    fn load(&self, id: PlayerId, defaults: &RecordDefaults) -> Result<PlayerRecord> {
        Ok(PlayerRecord::with_defaults(id, defaults))
    }

    fn save(&self, _record: &PlayerRecord) -> Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
    }
}

#[test]
fn test_failed_logout_keeps_record() {
    let service = DifficultyService::new(DifficultyConfig::default(), Box::new(BrokenStore));
    let player = PlayerId::new();
    service.on_login(player).unwrap();
    hit_spider(&service, player, 1, 5.0);

    let result = service.on_logout(player);
    assert!(matches!(result, Err(DifficultyError::IoError(_))));
    assert!(service.registry().contains(player));

    let spider = service.admin().describe(player, CategoryId::Spider).unwrap();
    assert_eq!(spider.damage_given, 5.0);
}

#[test]
fn test_corrupt_file_fails_login() {
    let dir = scratch_dir();
    fs::create_dir_all(&dir).unwrap();
    let player = PlayerId::new();
    let store = TomlStore::new(&dir);
    fs::write(store.player_path(player), "categories = 7 [").unwrap();

    let service = DifficultyService::with_toml_store(config_in(&dir));
    assert!(matches!(
        service.on_login(player),
        Err(DifficultyError::TomlDecode(_))
    ));
    assert!(!service.registry().contains(player));

    let _ = fs::remove_dir_all(&dir);
}
