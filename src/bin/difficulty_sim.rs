//! Headless Difficulty Simulator
//!
//! Pits simulated players of varying skill against random creatures and
//! reports where the difficulty engine settles for each of them.

use std::path::PathBuf;

use clap::Parser;
use dynamic_difficulty::combat::{Actor, CreatureActor, DamageEvent, DeathEvent, PlayerActor};
use dynamic_difficulty::core::types::{CreatureId, ItemStack, PlayerId};
use dynamic_difficulty::creature::{category, CategoryId, CATEGORY_COUNT};
use dynamic_difficulty::persistence::MemoryStore;
use dynamic_difficulty::{DifficultyConfig, DifficultyService};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Headless Difficulty Simulator - watch levels converge per player skill
#[derive(Parser, Debug)]
#[command(name = "difficulty_sim")]
#[command(about = "Simulate players of varying skill and report their difficulty levels")]
struct Args {
    /// Number of simulated players
    #[arg(long, default_value_t = 8)]
    players: usize,

    /// Fights per player
    #[arg(long, default_value_t = 300)]
    rounds: u32,

    /// Server ticks that pass between fights
    #[arg(long, default_value_t = 40)]
    ticks_per_round: u64,

    /// Only fight this category (default: random category per fight)
    #[arg(long)]
    category: Option<String>,

    /// Configuration file (TOML); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

struct SimPlayer {
    id: PlayerId,
    /// Multiplier on damage dealt, divisor on damage taken
    skill: f64,
    wins: u32,
    losses: u32,
    experience: u32,
}

#[derive(Serialize)]
struct CategoryLevel {
    category: String,
    encounters: usize,
    level_in_use: f64,
    estimated_level: f64,
}

#[derive(Serialize)]
struct PlayerReport {
    player: String,
    skill: f64,
    wins: u32,
    losses: u32,
    experience: u32,
    mean_level: f64,
    categories: Vec<CategoryLevel>,
}

#[derive(Serialize)]
struct SimReport {
    seed: u64,
    rounds: u32,
    ticks: u64,
    analysis_passes: u32,
    players: Vec<PlayerReport>,
}

enum FightResult {
    Won,
    Lost,
    Draw,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dynamic_difficulty=warn")),
        )
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut rng = StdRng::seed_from_u64(seed);

    let config = match &args.config {
        Some(path) => DifficultyConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config '{}': {}", path.display(), e);
            eprintln!("Using default configuration");
            DifficultyConfig::default()
        }),
        None => DifficultyConfig::default(),
    };

    let fixed_category = args.category.as_deref().and_then(|name| {
        let found = dynamic_difficulty::creature::category_by_name(name);
        if found.is_none() {
            eprintln!("Unknown category '{}', fighting random categories", name);
        }
        found
    });

    let player_max_health = config.estimate.player_max_health;
    let mut service = DifficultyService::new(config, Box::new(MemoryStore::new()));

    // Skill spread evenly from weak to strong
    let mut players: Vec<SimPlayer> = (0..args.players)
        .map(|i| SimPlayer {
            id: PlayerId::new(),
            skill: if args.players > 1 {
                0.5 + 1.5 * i as f64 / (args.players - 1) as f64
            } else {
                1.0
            },
            wins: 0,
            losses: 0,
            experience: 0,
        })
        .collect();

    for player in &players {
        if let Err(e) = service.on_login(player.id) {
            eprintln!("Failed to register {}: {}", player.id, e);
        }
    }

    let mut next_creature = 0u64;
    let mut ticks = 0u64;
    let mut analysis_passes = 0u32;

    for _ in 0..args.rounds {
        for player in players.iter_mut() {
            let category_id = fixed_category.unwrap_or_else(|| random_category(&mut rng));
            next_creature += 1;
            let creature =
                CreatureActor::new(CreatureId(next_creature), category(category_id).name);

            match fight(&service, &mut rng, player, &creature, player_max_health) {
                FightResult::Won => player.wins += 1,
                FightResult::Lost => player.losses += 1,
                FightResult::Draw => {}
            }
        }

        for _ in 0..args.ticks_per_round {
            ticks += 1;
            if let Some(report) = service.on_server_tick() {
                analysis_passes += 1;
                tracing::debug!(
                    "Analysis pass {}: {} records updated",
                    analysis_passes,
                    report.records_updated
                );
            }
        }
    }

    let admin = service.admin();
    let reports = players
        .iter()
        .map(|player| {
            let categories: Vec<CategoryLevel> = admin
                .describe_all(player.id)
                .unwrap_or_default()
                .into_iter()
                .filter(|s| s.encounters > 0)
                .map(|s| CategoryLevel {
                    category: category(s.category).name.to_string(),
                    encounters: s.encounters,
                    level_in_use: s.level_in_use,
                    estimated_level: s.estimated_level,
                })
                .collect();
            let mean_level = if categories.is_empty() {
                100.0
            } else {
                categories.iter().map(|c| c.level_in_use).sum::<f64>() / categories.len() as f64
            };
            PlayerReport {
                player: player.id.to_string(),
                skill: player.skill,
                wins: player.wins,
                losses: player.losses,
                experience: player.experience,
                mean_level,
                categories,
            }
        })
        .collect();

    let report = SimReport {
        seed,
        rounds: args.rounds,
        ticks,
        analysis_passes,
        players: reports,
    };

    match args.format.as_str() {
        "json" => print_json(&report),
        "text" => print_text(&report),
        _ => {
            eprintln!("Unknown format '{}', defaulting to text", args.format);
            print_text(&report);
        }
    }
}

fn random_category(rng: &mut StdRng) -> CategoryId {
    dynamic_difficulty::creature::all_categories()
        .choose(rng)
        .unwrap_or(CategoryId::Zombie)
}

/// Alternate blows until one side drops or the exchange limit is reached
fn fight(
    service: &DifficultyService,
    rng: &mut StdRng,
    player: &mut SimPlayer,
    creature: &CreatureActor,
    player_max_health: f64,
) -> FightResult {
    let Some(category_id) = dynamic_difficulty::combat::category_of(creature) else {
        return FightResult::Draw;
    };
    let mut creature_health = category(category_id).max_health;
    let mut player_health = player_max_health;
    let actor = PlayerActor::new(player.id);

    for _ in 0..40 {
        let raw = rng.gen_range(2.0..6.0) * player.skill;
        creature_health -= service.on_damage(&DamageEvent {
            attacker: Actor::Player(actor),
            defender: Actor::Creature(creature.clone()),
            amount: raw,
        });
        if creature_health <= 0.0 {
            let outcome = service.on_death(&DeathEvent {
                victim: creature.clone(),
                killer: Some(Actor::Player(actor)),
                experience: 5,
                drops: vec![ItemStack::new("bone", rng.gen_range(0..3))],
            });
            player.experience += outcome.experience;
            return FightResult::Won;
        }

        let raw = rng.gen_range(1.0..4.0) / player.skill;
        player_health -= service.on_damage(&DamageEvent {
            attacker: Actor::Creature(creature.clone()),
            defender: Actor::Player(actor),
            amount: raw,
        });
        if player_health <= 0.0 {
            return FightResult::Lost;
        }
    }
    FightResult::Draw
}

fn print_json(report: &SimReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize report: {}", e),
    }
}

fn print_text(report: &SimReport) {
    println!("Difficulty Simulation");
    println!("=====================");
    println!(
        "Rounds: {}  Ticks: {}  Analysis passes: {}  Categories: {}",
        report.rounds, report.ticks, report.analysis_passes, CATEGORY_COUNT
    );
    println!();
    for player in &report.players {
        println!(
            "skill {:.2}  won {:>4}  lost {:>4}  xp {:>6}  mean level {:>6.1}",
            player.skill, player.wins, player.losses, player.experience, player.mean_level
        );
        for c in &player.categories {
            println!(
                "    {:<16} encounters {:>4}  in use {:>6.1}  estimate {:>6.1}",
                c.category, c.encounters, c.level_in_use, c.estimated_level
            );
        }
    }
    println!();
    println!("Seed: {}", report.seed);
}
