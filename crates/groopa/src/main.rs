//! Headless Groopa driver
//!
//! Builds a character, runs the simulation for a fixed number of ticks with
//! scripted input and prints what happened.

mod script;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use gp_core::entity::{Attribute, ClassType, MonsterKind};
use gp_core::world::MapId;
use gp_core::{ActionResult, Millis, SimConfig, Simulation, TickReport};
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::script::Pattern;

#[derive(Debug, Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Parser)]
#[command(name = "groopa")]
#[command(version)]
#[command(about = "Run the Groopa simulation headless", long_about = None)]
struct Args {
    /// RNG seed
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Character class (warrior, mage, elf)
    #[arg(short, long, default_value = "warrior")]
    class: ClassType,

    /// Character name
    #[arg(short, long, default_value = "Hero")]
    name: String,

    /// Starting map (lorens, caverns)
    #[arg(short, long, default_value = "lorens")]
    map: MapId,

    /// Number of ticks to run
    #[arg(short, long, default_value = "3600")]
    ticks: u64,

    /// Milliseconds per tick
    #[arg(long, default_value = "16")]
    dt: u32,

    /// Scripted player behaviour
    #[arg(short, long, value_enum, default_value_t = Pattern::Roam)]
    pattern: Pattern,

    /// Attribute to spend points on whenever some are available
    #[arg(long)]
    spend: Option<Attribute>,

    /// JSON file overriding simulation tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the final game state as JSON
    #[arg(long)]
    dump: Option<PathBuf>,
}

/// Totals accumulated over a run
#[derive(Debug, Default)]
struct RunTotals {
    ticks: u64,
    damage_dealt: i64,
    damage_taken: i64,
    kills: Vec<MonsterKind>,
    level_ups: u32,
    projectiles: u32,
    spawned: u32,
    died_at: Option<u64>,
}

impl RunTotals {
    fn absorb(&mut self, tick: u64, report: TickReport) {
        self.ticks += 1;
        self.damage_dealt += i64::from(report.damage_dealt);
        self.damage_taken += i64::from(report.damage_taken);
        self.kills.extend(report.kills);
        self.level_ups += report.level_ups;
        self.projectiles += report.projectiles_fired;
        self.spawned += report.spawned;
        if report.player_died && self.died_at.is_none() {
            self.died_at = Some(tick);
        }
    }

    fn kills_of(&self, kind: MonsterKind) -> usize {
        self.kills.iter().filter(|k| **k == kind).count()
    }
}

fn load_config(path: Option<&Path>) -> Result<SimConfig, CliError> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = fs::read_to_string(path)?;
    let config = serde_json::from_str(&text)?;
    tracing::info!(path = %path.display(), "loaded tuning overrides");
    Ok(config)
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;

    let mut sim = Simulation::new(&args.name, args.class, config, args.seed);
    if args.map != MapId::Lorens {
        sim.switch_map(args.map);
    }

    let dt = args.dt.max(1);
    let mut totals = RunTotals::default();
    for tick in 0..args.ticks {
        let now: Millis = (tick + 1) * Millis::from(dt);
        let input = args.pattern.input(tick, sim.state(), sim.config());
        let report = sim.tick(dt as f32, &input, now);
        totals.absorb(tick, report);

        if let Some(attr) = args.spend {
            while sim.state().player.stats().attribute_points > 0 {
                if sim.allocate_attribute(attr) != ActionResult::Success {
                    break;
                }
            }
        }
        if totals.died_at == Some(tick) {
            tracing::info!(tick, "player died, stopping run");
            break;
        }
    }

    print_summary(&sim, &totals);

    if let Some(path) = args.dump.as_deref() {
        let json = serde_json::to_string_pretty(sim.state())?;
        fs::write(path, json)?;
        tracing::info!(path = %path.display(), "wrote final state");
    }
    Ok(())
}

fn print_summary(sim: &Simulation, totals: &RunTotals) {
    let hud = sim.hud();
    let s = &hud.stats;
    println!(
        "{} the {} on {} after {} ticks",
        hud.name, hud.class, hud.map_name, totals.ticks
    );
    println!(
        "  level {}  exp {}/{}  gold {}  points {}",
        s.level, s.exp, hud.exp_to_next, s.gold, s.attribute_points
    );
    println!(
        "  hp {}/{}  mana {}/{}  atk {}  def {}  speed {:.2}",
        s.hp, s.max_hp, s.mana, s.max_mana, s.atk, s.def, s.speed
    );
    println!("  tile ({}, {})", hud.tile.0, hud.tile.1);
    println!(
        "  dealt {}  taken {}  shots {}  spawned {}  level-ups {}",
        totals.damage_dealt,
        totals.damage_taken,
        totals.projectiles,
        totals.spawned,
        totals.level_ups
    );
    if let Some(tick) = totals.died_at {
        println!("  died on tick {tick}");
    }

    if !totals.kills.is_empty() {
        println!("Kills:");
        for kind in MonsterKind::iter() {
            let n = totals.kills_of(kind);
            if n > 0 {
                println!("  {:<10} {n}", kind.to_string());
            }
        }
    }

    println!("Messages:");
    for msg in &hud.messages {
        println!("  [{:>7}] {}", msg.at, msg.text);
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("groopa=info,gp_core=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("groopa: {e}");
        std::process::exit(1);
    }
}
