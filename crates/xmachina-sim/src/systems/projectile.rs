//! Player projectiles: firing, flight, expiry and hit tests.

use glam::Vec3;

use xmachina_core::components::{PoolHandle, Projectile};
use xmachina_core::config::Tuning;
use xmachina_core::constants::PROJECTILE_CULL_RADIUS;
use xmachina_core::enums::{FireOutcome, ProjectileDespawnReason};
use xmachina_core::events::GameEvent;
use xmachina_core::state::PoolStats;
use xmachina_spatial::VisibilityGate;

use crate::pool::EntityPool;
use crate::systems::drones::DroneSystem;

/// Owns the projectile pool and ballistic parameters.
#[derive(Debug)]
pub struct ProjectileSystem {
    pool: EntityPool<Projectile>,
    speed: f32,
    lifetime_ms: f64,
    max_distance: f32,
    hitbox_radius: f32,
}

impl ProjectileSystem {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pool: EntityPool::new("projectile", tuning.projectile_pool_size),
            speed: tuning.projectile_speed,
            lifetime_ms: tuning.projectile_lifetime_ms,
            max_distance: tuning.projectile_max_distance,
            hitbox_radius: tuning.projectile_hitbox_radius,
        }
    }

    /// Launch a projectile unless the weapon is cooling down or the pool is dry.
    pub fn fire(
        &mut self,
        origin: Vec3,
        direction: Vec3,
        now_ms: f64,
        cooling_down: bool,
        events: &mut Vec<GameEvent>,
    ) -> FireOutcome {
        if cooling_down {
            return FireOutcome::CoolingDown;
        }
        let handle = match self.pool.acquire() {
            Ok(handle) => handle,
            Err(err) => {
                log::debug!("Fire request dropped: {err}");
                return FireOutcome::PoolExhausted;
            }
        };
        let direction = direction.try_normalize().unwrap_or(Vec3::Z);
        if let Some(projectile) = self.pool.get_mut(handle) {
            *projectile = Projectile {
                position: origin,
                direction,
                speed: self.speed,
                created_at_ms: now_ms,
                alive: true,
            };
        }
        events.push(GameEvent::ProjectileSpawned {
            projectile: handle,
            position: origin,
            direction,
        });
        FireOutcome::Fired
    }

    /// Advance every projectile one tick. Returns the number of drones hit.
    ///
    /// Expiry applies to all projectiles. Only those inside the gate sync
    /// their visuals and test for hits.
    pub fn tick(
        &mut self,
        dt_secs: f32,
        now_ms: f64,
        gate: &VisibilityGate,
        drones: &mut DroneSystem,
        events: &mut Vec<GameEvent>,
    ) -> usize {
        let mut hits = 0;
        for handle in self.pool.active_handles() {
            let Some(projectile) = self.pool.get_mut(handle) else {
                continue;
            };
            projectile.position += projectile.direction * projectile.speed * dt_secs;
            let Projectile {
                position,
                direction,
                created_at_ms,
                ..
            } = *projectile;

            if now_ms - created_at_ms > self.lifetime_ms {
                self.despawn(handle, position, ProjectileDespawnReason::Expired, events);
                continue;
            }

            if !gate.admits(position, PROJECTILE_CULL_RADIUS, self.max_distance) {
                continue;
            }
            events.push(GameEvent::ProjectileMoved {
                projectile: handle,
                position,
                direction,
            });

            let Some(target) = self.nearest_target(position, drones) else {
                continue;
            };
            self.despawn(handle, position, ProjectileDespawnReason::Hit, events);
            if drones.destroy_by_shot(target, events).is_ok() {
                hits += 1;
            }
        }
        hits
    }

    /// Closest drone inside the hitbox; ties go to the earliest activated.
    fn nearest_target(&self, position: Vec3, drones: &DroneSystem) -> Option<PoolHandle> {
        drones
            .iter_active()
            .map(|(handle, drone)| (handle, drone.position.distance(position)))
            .filter(|(_, distance)| *distance < self.hitbox_radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(handle, _)| handle)
    }

    fn despawn(
        &mut self,
        handle: PoolHandle,
        position: Vec3,
        reason: ProjectileDespawnReason,
        events: &mut Vec<GameEvent>,
    ) {
        if self.pool.release(handle).is_ok() {
            events.push(GameEvent::ProjectileDespawned {
                projectile: handle,
                position,
                reason,
            });
        }
    }

    /// Release every projectile, reporting each one.
    pub fn clear(&mut self, events: &mut Vec<GameEvent>) -> usize {
        let in_flight: Vec<(PoolHandle, Vec3)> = self
            .pool
            .iter_active()
            .map(|(handle, p)| (handle, p.position))
            .collect();
        for (handle, position) in &in_flight {
            events.push(GameEvent::ProjectileDespawned {
                projectile: *handle,
                position: *position,
                reason: ProjectileDespawnReason::Restart,
            });
        }
        self.pool.release_all()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = (PoolHandle, &Projectile)> + '_ {
        self.pool.iter_active()
    }

    pub fn get(&self, handle: PoolHandle) -> Option<&Projectile> {
        self.pool.get(handle)
    }

    pub fn active_count(&self) -> usize {
        self.pool.active_count()
    }

    pub fn stats(&self) -> PoolStats {
        self.pool.stats()
    }
}
