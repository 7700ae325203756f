//! xmachina-headless: drive the simulation without a renderer.
//!
//! Usage:
//!   xmachina-headless run --ticks 3600 --seed 7 --tuning tuning.json
//!   xmachina-headless run --snapshot final.json
//!
//! Set `RUST_LOG=debug` to see pool and roster activity.

use std::path::{Path, PathBuf};
use std::process;

use glam::Vec3;

use xmachina_core::commands::{FrameInput, PlayerCommand};
use xmachina_core::config::Tuning;
use xmachina_core::constants::NOMINAL_DT_SECS;
use xmachina_core::enums::GamePhase;
use xmachina_core::state::GameStateSnapshot;
use xmachina_sim::{SimConfig, SimulationEngine};

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "xmachina-headless: run X-Machina without a renderer\n\
         \n\
         Commands:\n\
         \n\
         run       Fly an autopilot through a generated city\n\
         \n\
           --ticks <N>        Frames to simulate (default: 3600)\n\
           --seed <N>         RNG seed (default: 42)\n\
           --tuning <path>    JSON tuning overrides (optional)\n\
           --snapshot <path>  Write the final snapshot as JSON (optional)\n"
    );
}

fn parse_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn load_tuning(path: &Path) -> Tuning {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    };
    match Tuning::from_json_str(&text) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error in {}: {e}", path.display());
            process::exit(1);
        }
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let ticks: u64 = parse_value(args, "--ticks").unwrap_or(3600);
    let seed: u64 = parse_value(args, "--seed").unwrap_or(42);
    let tuning = match parse_value::<PathBuf>(args, "--tuning") {
        Some(path) => load_tuning(&path),
        None => Tuning::default(),
    };
    let snapshot_path: Option<PathBuf> = parse_value(args, "--snapshot");

    let mut engine = match SimulationEngine::new(SimConfig { seed, tuning }) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error in tuning: {e}");
            process::exit(1);
        }
    };
    log::info!(
        "Seed {seed}: {} buildings, {} fragments",
        engine.buildings().len(),
        engine.fragments().total()
    );
    engine.queue_command(PlayerCommand::StartGame);

    let mut last = GameStateSnapshot::default();
    for frame in 0..ticks {
        last = engine.tick(NOMINAL_DT_SECS, autopilot(frame));

        if frame % 600 == 0 {
            log::info!(
                "t={:.1}s health={} score={} drones={} projectiles={}/{} explosions={}",
                last.time.elapsed_ms / 1000.0,
                last.player.health,
                last.score.score,
                last.pools.drones.active,
                last.pools.projectiles.active,
                last.pools.projectiles.total,
                last.pools.explosions.active,
            );
        }
        if matches!(last.phase, GamePhase::GameOver | GamePhase::LevelComplete) {
            log::info!("Stopped at frame {frame}: {:?}", last.phase);
            break;
        }
    }

    eprintln!(
        "Done: {:?} after {:.1}s, score {}, fragments {}/{}, drones destroyed {}, shots {}",
        last.phase,
        last.time.elapsed_ms / 1000.0,
        last.score.score,
        last.score.fragments_collected,
        last.score.fragments_total,
        last.score.drones_destroyed,
        last.score.shots_fired,
    );

    if let Some(path) = snapshot_path {
        let json = match serde_json::to_string_pretty(&last) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        };
        if let Err(e) = std::fs::write(&path, json) {
            eprintln!("Error writing {}: {e}", path.display());
            process::exit(1);
        }
        eprintln!("Snapshot written to {}", path.display());
    }
}

/// Widening spiral around the conduit crossing, firing twice a second.
fn autopilot(frame: u64) -> FrameInput {
    let t = frame as f32 * NOMINAL_DT_SECS;
    let angle = t * 0.2;
    let radius = 40.0 + (t * 2.0).min(150.0);
    let position = Vec3::new(angle.cos() * radius, 60.0 + 20.0 * (t * 0.1).sin(), angle.sin() * radius);
    // Nose along the counter-clockwise tangent.
    let heading = -angle;
    let input = FrameInput::at(position, heading);
    if frame % 30 == 0 {
        input.with_fire()
    } else {
        input
    }
}
