//! Drone roster, motion and player contact.
//!
//! The roster keeps the active count at the target by activating pooled
//! drones, guards first. Motion runs only for drones inside the visibility
//! gate; drones outside it hold position. Contact with the player is checked
//! for every active drone.

use glam::{Quat, Vec3};
use rand::seq::SliceRandom;
use rand::Rng;

use xmachina_core::components::{Drone, PoolHandle};
use xmachina_core::config::Tuning;
use xmachina_core::constants::*;
use xmachina_core::enums::{DamageSource, DroneDespawnCause, DroneMode, DroneRole};
use xmachina_core::error::PoolError;
use xmachina_core::events::GameEvent;
use xmachina_core::state::PoolStats;
use xmachina_core::types::{Fragment, FragmentId};
use xmachina_drone_ai::fsm::{self, DroneContext, DroneParams};
use xmachina_drone_ai::placement::{self, Placement};
use xmachina_spatial::collision::within_radius;
use xmachina_spatial::VisibilityGate;

use crate::pool::EntityPool;
use crate::systems::player::PlayerVitals;

/// Owns the drone pool and roster policy.
#[derive(Debug)]
pub struct DroneSystem {
    pool: EntityPool<Drone>,
    params: DroneParams,
    target_count: usize,
    max_guards: usize,
    visible_radius: f32,
    collision_damage: f32,
    city_size: f32,
    stale_ms: f64,
    /// Consecutive roster passes that activated nothing despite a deficit.
    empty_passes: u32,
}

impl DroneSystem {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pool: EntityPool::new("drone", tuning.drone_pool_size),
            params: DroneParams::from_tuning(tuning),
            target_count: tuning.drone_target_count,
            max_guards: tuning.drone_max_guards,
            visible_radius: tuning.drone_visible_radius,
            collision_damage: tuning.drone_collision_damage,
            city_size: tuning.city_size,
            stale_ms: tuning.drone_stale_ms,
            empty_passes: 0,
        }
    }

    /// Top the roster up toward the target count. Returns drones activated.
    ///
    /// Guards go first, one per distinct unguarded fragment, then patrols
    /// fill the rest. After repeated passes that activate nothing, drones
    /// unseen for longer than the stale limit are reclaimed.
    pub fn maintain_roster<R: Rng>(&mut self, rng: &mut R, fragments: &[Fragment], now_ms: f64) -> usize {
        let deficit = self.target_count.saturating_sub(self.pool.active_count());
        let mut activated = 0;

        if deficit > 0 {
            let guarded: Vec<FragmentId> = self
                .pool
                .iter_active()
                .filter_map(|(_, drone)| drone.guarded_fragment)
                .collect();
            let unguarded: Vec<&Fragment> = fragments
                .iter()
                .filter(|f| !f.collected && !guarded.contains(&f.id))
                .collect();
            let guard_count = self.max_guards.min(unguarded.len()).min(deficit);
            let chosen: Vec<Fragment> = unguarded
                .choose_multiple(rng, guard_count)
                .map(|f| **f)
                .collect();

            for fragment in chosen {
                let spot = placement::guard_placement(rng, fragment.position);
                if self.activate(spot, DroneRole::Guard, Some(fragment.id), now_ms).is_none() {
                    break;
                }
                activated += 1;
            }
            while activated < deficit {
                let spot = placement::patrol_placement(rng, self.city_size);
                if self.activate(spot, DroneRole::Patrol, None, now_ms).is_none() {
                    break;
                }
                activated += 1;
            }

            if activated == 0 {
                self.empty_passes += 1;
                if self.empty_passes >= DRONE_STALE_SWEEP_AFTER_FAILURES {
                    self.sweep_stale(now_ms);
                    self.empty_passes = 0;
                }
            } else {
                self.empty_passes = 0;
                log::debug!(
                    "Activated {activated} drones, {} active",
                    self.pool.active_count()
                );
            }
        }

        activated
    }

    fn activate(
        &mut self,
        spot: Placement,
        role: DroneRole,
        guarded_fragment: Option<FragmentId>,
        now_ms: f64,
    ) -> Option<PoolHandle> {
        let handle = match self.pool.acquire() {
            Ok(handle) => handle,
            Err(err) => {
                log::debug!("Drone spawn dropped: {err}");
                return None;
            }
        };
        let drone = self.pool.get_mut(handle)?;
        *drone = Drone {
            position: spot.position,
            velocity: Vec3::ZERO,
            patrol_target: spot.patrol_target,
            role,
            mode: DroneMode::Patrol,
            active: true,
            guarded_fragment,
            last_active_ms: now_ms,
            orientation: Quat::IDENTITY,
        };
        Some(handle)
    }

    /// Reclaim drones not seen for longer than the stale limit.
    pub fn sweep_stale(&mut self, now_ms: f64) -> usize {
        let stale: Vec<PoolHandle> = self
            .pool
            .iter_active()
            .filter(|(_, drone)| now_ms - drone.last_active_ms > self.stale_ms)
            .map(|(handle, _)| handle)
            .collect();
        for &handle in &stale {
            let _ = self.retire(handle, DroneDespawnCause::Stale);
        }
        if !stale.is_empty() {
            log::warn!("Staleness sweep reclaimed {} drones", stale.len());
        }
        stale.len()
    }

    /// Steer every drone inside the gate and mark it seen at `now_ms`.
    /// Returns how many moved.
    pub fn update_motion<R: Rng>(
        &mut self,
        rng: &mut R,
        gate: &VisibilityGate,
        now_ms: f64,
    ) -> usize {
        let mut moved = 0;
        for handle in self.pool.active_handles() {
            let Some(drone) = self.pool.get(handle).copied() else {
                continue;
            };
            if !gate.admits(drone.position, DRONE_CULL_RADIUS, self.visible_radius) {
                continue;
            }

            let update = fsm::evaluate(
                &DroneContext {
                    mode: drone.mode,
                    position: drone.position,
                    patrol_target: drone.patrol_target,
                    player_position: gate.player_position,
                    orientation: drone.orientation,
                },
                &self.params,
            );
            let next_target = update
                .reached_patrol_target
                .then(|| placement::next_patrol_target(rng, self.city_size));

            if let Some(drone) = self.pool.get_mut(handle) {
                drone.mode = update.new_mode;
                drone.velocity = update.velocity;
                drone.position = update.new_position;
                drone.orientation = update.orientation;
                drone.last_active_ms = now_ms;
                if let Some(target) = next_target {
                    drone.patrol_target = target;
                }
            }
            moved += 1;
        }
        moved
    }

    /// Ram check against the player. Returns drones lost to collisions.
    ///
    /// Stops as soon as the player turns invincible, so one tick deals at
    /// most one hit.
    pub fn check_player_collision(
        &mut self,
        player_position: Vec3,
        vitals: &mut PlayerVitals,
        now_ms: f64,
        events: &mut Vec<GameEvent>,
    ) -> usize {
        let mut collisions = 0;
        for handle in self.pool.active_handles() {
            if vitals.is_invincible(now_ms) {
                break;
            }
            let Some(position) = self.pool.get(handle).map(|d| d.position) else {
                continue;
            };
            if !within_radius(position, player_position, DRONE_COLLISION_RADIUS) {
                continue;
            }
            if self.retire(handle, DroneDespawnCause::PlayerCollision).is_err() {
                continue;
            }
            vitals.apply_damage(self.collision_damage, DamageSource::Drone, now_ms, events);
            events.push(GameEvent::ExplosionRequested { position });
            events.push(GameEvent::DroneDestroyed {
                position,
                cause: DroneDespawnCause::PlayerCollision,
            });
            collisions += 1;
        }
        collisions
    }

    /// A projectile struck `handle`.
    pub fn destroy_by_shot(
        &mut self,
        handle: PoolHandle,
        events: &mut Vec<GameEvent>,
    ) -> Result<Vec3, PoolError> {
        let position = self.retire(handle, DroneDespawnCause::Shot)?;
        events.push(GameEvent::DroneDestroyed {
            position,
            cause: DroneDespawnCause::Shot,
        });
        events.push(GameEvent::ExplosionRequested { position });
        Ok(position)
    }

    /// Return a drone to the pool, reporting where it was.
    fn retire(&mut self, handle: PoolHandle, cause: DroneDespawnCause) -> Result<Vec3, PoolError> {
        let position = self.pool.get(handle).map(|d| d.position).unwrap_or_default();
        self.pool.release(handle)?;
        log::debug!("Drone {} retired: {cause:?}", handle.index);
        Ok(position)
    }

    /// The fragment was collected; its guards become ordinary flyers.
    pub fn clear_guard(&mut self, fragment: FragmentId) {
        for handle in self.pool.active_handles() {
            if let Some(drone) = self.pool.get_mut(handle) {
                if drone.guarded_fragment == Some(fragment) {
                    drone.guarded_fragment = None;
                }
            }
        }
    }

    /// Whether an active drone guards `fragment`.
    pub fn is_guarded(&self, fragment: FragmentId) -> bool {
        self.pool
            .iter_active()
            .any(|(_, drone)| drone.guarded_fragment == Some(fragment))
    }

    /// Release the whole roster.
    pub fn clear(&mut self) -> usize {
        self.empty_passes = 0;
        let released = self.pool.release_all();
        log::debug!("Drone roster cleared: {released}");
        released
    }

    pub fn iter_active(&self) -> impl Iterator<Item = (PoolHandle, &Drone)> + '_ {
        self.pool.iter_active()
    }

    pub fn get(&self, handle: PoolHandle) -> Option<&Drone> {
        self.pool.get(handle)
    }

    pub fn active_count(&self) -> usize {
        self.pool.active_count()
    }

    pub fn stats(&self) -> PoolStats {
        self.pool.stats()
    }

    /// Place a patrol drone exactly, bypassing roster policy.
    #[cfg(test)]
    pub fn spawn_at(&mut self, position: Vec3, now_ms: f64) -> Option<PoolHandle> {
        self.activate(
            Placement {
                position,
                patrol_target: position,
            },
            DroneRole::Patrol,
            None,
            now_ms,
        )
    }

    #[cfg(test)]
    pub fn get_mut(&mut self, handle: PoolHandle) -> Option<&mut Drone> {
        self.pool.get_mut(handle)
    }
}
