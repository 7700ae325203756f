//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns every system and the level layout, processes
//! player commands, runs the systems in a fixed order, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use xmachina_core::commands::{FrameInput, PlayerCommand};
use xmachina_core::config::Tuning;
use xmachina_core::constants::*;
use xmachina_core::enums::{DamageSource, FireOutcome, GamePhase};
use xmachina_core::error::ConfigError;
use xmachina_core::events::GameEvent;
use xmachina_core::state::{GameStateSnapshot, PlayerView, WeaponView};
use xmachina_core::types::{Building, SimTime};
use xmachina_procgen::generate_level;
use xmachina_spatial::VisibilityGate;

use crate::systems;
use crate::systems::drones::DroneSystem;
use crate::systems::explosion::ExplosionSystem;
use crate::systems::fragments::FragmentField;
use crate::systems::player::{resolve_ship_move, PlayerVitals, WeaponCooldown};
use crate::systems::projectile::ProjectileSystem;
use crate::systems::snapshot::SnapshotSources;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. Owns all sim state.
pub struct SimulationEngine {
    tuning: Tuning,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,

    buildings: Vec<Building>,
    fragments: FragmentField,
    projectiles: ProjectileSystem,
    drones: DroneSystem,
    explosions: ExplosionSystem,

    vitals: PlayerVitals,
    weapon: WeaponCooldown,
    ship_position: Vec3,
    ship_heading: f32,
    drones_destroyed: u32,
    shots_fired: u32,
}

impl SimulationEngine {
    /// Create a new engine with a freshly generated level.
    ///
    /// Tuning is validated first; a config that reached us through serde
    /// without going through `Tuning::from_json_str` is rejected here.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.tuning.validate()?;
        let tuning = config.tuning;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let level = generate_level(&mut rng, &tuning);

        Ok(Self {
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            buildings: level.buildings,
            fragments: FragmentField::new(level.fragments),
            projectiles: ProjectileSystem::new(&tuning),
            drones: DroneSystem::new(&tuning),
            explosions: ExplosionSystem::new(tuning.explosion_pool_size),
            vitals: PlayerVitals::new(&tuning),
            weapon: WeaponCooldown::new(tuning.weapon_cooldown_ms),
            ship_position: ship_start(),
            ship_heading: SHIP_START_HEADING,
            drones_destroyed: 0,
            shots_fired: 0,
            tuning,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt_secs` and return the resulting snapshot.
    ///
    /// Systems only run while the phase is `Playing`; in every other phase
    /// the clock stands still and the snapshot mirrors the frozen state.
    pub fn tick(&mut self, dt_secs: f32, input: FrameInput) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems(dt_secs, &input);
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn fragments(&self) -> &FragmentField {
        &self.fragments
    }

    pub fn drones(&self) -> &DroneSystem {
        &self.drones
    }

    pub fn projectiles(&self) -> &ProjectileSystem {
        &self.projectiles
    }

    pub fn explosions(&self) -> &ExplosionSystem {
        &self.explosions
    }

    pub fn vitals(&self) -> &PlayerVitals {
        &self.vitals
    }

    pub fn ship_position(&self) -> Vec3 {
        self.ship_position
    }

    /// Replace the city layout (for tests and scripted scenarios).
    pub fn set_buildings(&mut self, buildings: Vec<Building>) {
        self.buildings = buildings;
    }

    #[cfg(test)]
    pub fn drones_mut(&mut self) -> &mut DroneSystem {
        &mut self.drones
    }

    #[cfg(test)]
    pub fn fragments_mut(&mut self) -> &mut FragmentField {
        &mut self.fragments
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Start {
                    self.phase = GamePhase::Playing;
                    log::info!(
                        "Game started: {} buildings, {} fragments",
                        self.buildings.len(),
                        self.fragments.total()
                    );
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if matches!(self.phase, GamePhase::Paused | GamePhase::LevelComplete) {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::Restart => self.restart(),
        }
    }

    /// Clear every pool and build a fresh level.
    fn restart(&mut self) {
        let projectiles = self.projectiles.clear(&mut self.events);
        let drones = self.drones.clear();
        let explosions = self.explosions.clear();

        let level = generate_level(&mut self.rng, &self.tuning);
        self.buildings = level.buildings;
        self.fragments = FragmentField::new(level.fragments);
        self.vitals = PlayerVitals::new(&self.tuning);
        self.weapon.reset();
        self.ship_position = ship_start();
        self.ship_heading = SHIP_START_HEADING;
        self.drones_destroyed = 0;
        self.shots_fired = 0;
        self.phase = GamePhase::Playing;

        log::info!(
            "Game restarted: released {projectiles} projectiles, {drones} drones, {explosions} explosions"
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt_secs: f32, input: &FrameInput) {
        // 1. Clock
        self.time.advance(dt_secs);
        let now = self.time.now_ms();

        // 2. Ship movement
        let ship = resolve_ship_move(
            self.ship_position,
            input.ship_position,
            self.tuning.city_size,
            &self.buildings,
        );
        self.ship_position = ship.position;
        self.ship_heading = input.ship_heading;
        if ship.collided && self.vitals.can_take_building_damage(now) {
            self.vitals.apply_damage(
                self.tuning.building_collision_damage,
                DamageSource::Building,
                now,
                &mut self.events,
            );
        }

        // 3. Visibility gate, read-only from here on
        let gate = VisibilityGate::compute(&input.camera, self.ship_position);

        // 4. Fire intent
        if input.fire {
            let outcome = self.projectiles.fire(
                self.ship_position,
                input.forward(),
                now,
                self.weapon.is_cooling_down(now),
                &mut self.events,
            );
            if outcome == FireOutcome::Fired {
                self.weapon.trigger(now);
                self.shots_fired += 1;
            }
        }

        // 5. Projectiles
        let hits = self.projectiles.tick(
            dt_secs,
            now,
            &gate,
            &mut self.drones,
            &mut self.events,
        );
        self.drones_destroyed += hits as u32;

        // 6. Drones
        self.drones
            .maintain_roster(&mut self.rng, self.fragments.fragments(), now);
        self.drones.update_motion(&mut self.rng, &gate, now);
        self.drones.check_player_collision(
            self.ship_position,
            &mut self.vitals,
            now,
            &mut self.events,
        );

        // 7. Explosions
        self.explosions.tick(dt_secs);
        let requested: Vec<Vec3> = self
            .events
            .iter()
            .filter_map(|event| match event {
                GameEvent::ExplosionRequested { position } => Some(*position),
                _ => None,
            })
            .collect();
        for position in requested {
            self.explosions.trigger(position, &mut self.rng);
        }

        // 8. Fragments
        if let Some(collected) =
            self.fragments
                .update(dt_secs, now, self.ship_position, &mut self.events)
        {
            self.drones.clear_guard(collected);
            if self.fragments.remaining() == 0 {
                self.phase = GamePhase::LevelComplete;
                log::info!("Level complete with score {}", self.fragments.score);
            }
        }

        // 9. Vitals
        if self.vitals.is_dead() {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                score: self.fragments.score,
            });
            log::info!("Game over with score {}", self.fragments.score);
        }
    }

    fn build_snapshot(&self, events: Vec<GameEvent>) -> GameStateSnapshot {
        let now = self.time.now_ms();
        systems::snapshot::build_snapshot(
            SnapshotSources {
                time: self.time,
                phase: self.phase,
                player: PlayerView {
                    position: self.ship_position,
                    heading: self.ship_heading,
                    health: self.vitals.health,
                    invincible: self.vitals.is_invincible(now),
                },
                weapon: WeaponView {
                    ready: !self.weapon.is_cooling_down(now),
                    charge: self.weapon.progress(now),
                },
                drones: &self.drones,
                projectiles: &self.projectiles,
                explosions: &self.explosions,
                fragments: &self.fragments,
                drones_destroyed: self.drones_destroyed,
                shots_fired: self.shots_fired,
            },
            events,
        )
    }
}

fn ship_start() -> Vec3 {
    Vec3::new(0.0, SHIP_START_HEIGHT, 0.0)
}
