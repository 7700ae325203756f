//! Events emitted by the simulation for the UI, audio and VFX collaborators.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::PoolHandle;
use crate::enums::*;
use crate::types::FragmentId;

/// Everything the simulation reports about a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Player took damage.
    DamagePlayer { amount: f32, source: DamageSource },
    /// A data fragment was picked up.
    FragmentCollected {
        fragment: FragmentId,
        points: u32,
        multiplier: f32,
    },
    /// A drone left the roster violently (shot or rammed the player).
    DroneDestroyed {
        position: Vec3,
        cause: DroneDespawnCause,
    },
    /// Cosmetic burst requested at a point.
    ExplosionRequested { position: Vec3 },
    /// A projectile became active.
    ProjectileSpawned {
        projectile: PoolHandle,
        position: Vec3,
        direction: Vec3,
    },
    /// Visual sync for a visible projectile.
    ProjectileMoved {
        projectile: PoolHandle,
        position: Vec3,
        direction: Vec3,
    },
    /// A projectile returned to its pool.
    ProjectileDespawned {
        projectile: PoolHandle,
        position: Vec3,
        reason: ProjectileDespawnReason,
    },
    /// Every fragment of the level has been collected.
    LevelComplete { score: u32 },
    /// Player health reached zero.
    GameOver { score: u32 },
}
