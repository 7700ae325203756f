//! Cosmetic explosion bursts.
//!
//! Purely visual: a request made while every effect is busy is dropped.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use xmachina_core::components::{ExplosionEffect, Particle, PoolHandle};
use xmachina_core::constants::*;
use xmachina_core::state::PoolStats;

use crate::pool::EntityPool;

/// Owns the explosion effect pool.
#[derive(Debug)]
pub struct ExplosionSystem {
    pool: EntityPool<ExplosionEffect>,
}

impl ExplosionSystem {
    pub fn new(capacity: usize) -> Self {
        let pool = EntityPool::with_factory("explosion", capacity, || ExplosionEffect {
            particles: vec![Particle::default(); EXPLOSION_PARTICLE_COUNT],
            scale: 1.0,
            ..ExplosionEffect::default()
        });
        Self { pool }
    }

    /// Start a burst at `position`. `None` when the pool is exhausted.
    pub fn trigger<R: Rng>(&mut self, position: Vec3, rng: &mut R) -> Option<PoolHandle> {
        let handle = match self.pool.acquire() {
            Ok(handle) => handle,
            Err(err) => {
                log::debug!("Explosion dropped: {err}");
                return None;
            }
        };
        let effect = self.pool.get_mut(handle)?;
        effect.origin = position;
        effect.opacity = 1.0;
        effect.scale = 1.0;
        effect.active = true;
        for particle in &mut effect.particles {
            particle.offset = Vec3::ZERO;
            particle.velocity = random_direction(rng)
                * rng.gen_range(EXPLOSION_MIN_PARTICLE_SPEED..EXPLOSION_MAX_PARTICLE_SPEED);
        }
        Some(handle)
    }

    /// Advance particles, grow and fade; finished bursts return to the pool.
    pub fn tick(&mut self, dt_secs: f32) {
        for handle in self.pool.active_handles() {
            let Some(effect) = self.pool.get_mut(handle) else {
                continue;
            };
            for particle in &mut effect.particles {
                particle.offset += particle.velocity * dt_secs;
            }
            effect.scale += EXPLOSION_GROWTH_RATE * dt_secs;
            effect.opacity -= EXPLOSION_FADE_RATE * dt_secs;

            if effect.opacity <= 0.0 {
                let _ = self.pool.release(handle);
            }
        }
    }

    pub fn clear(&mut self) -> usize {
        self.pool.release_all()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = (PoolHandle, &ExplosionEffect)> + '_ {
        self.pool.iter_active()
    }

    pub fn stats(&self) -> PoolStats {
        self.pool.stats()
    }
}

/// Uniform direction on the unit sphere.
fn random_direction<R: Rng>(rng: &mut R) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let z: f32 = rng.gen_range(-1.0..1.0);
    let r = (1.0 - z * z).sqrt();
    Vec3::new(r * theta.cos(), r * theta.sin(), z)
}
