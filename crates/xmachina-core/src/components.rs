//! Pooled entity data.
//!
//! Components are plain data structs. Lifecycle logic lives in the systems
//! that own the pools, not here.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::{DroneMode, DroneRole};
use crate::types::FragmentId;

/// Identifies one activation of a pooled entity.
///
/// The generation changes every time the slot is handed out, so a handle kept
/// past its release never aliases the next occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolHandle {
    pub index: u32,
    pub generation: u32,
}

/// A player projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec3,
    /// Unit direction of travel.
    pub direction: Vec3,
    /// Units per second.
    pub speed: f32,
    /// Activation timestamp.
    pub created_at_ms: f64,
    /// Mirrors pool membership for consumers holding a copy: true from
    /// `fire` until release, false once the slot is reset.
    pub alive: bool,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::Z,
            speed: 0.0,
            created_at_ms: 0.0,
            alive: false,
        }
    }
}

/// An enemy drone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    pub position: Vec3,
    /// Displacement applied per tick.
    pub velocity: Vec3,
    pub patrol_target: Vec3,
    pub role: DroneRole,
    pub mode: DroneMode,
    pub active: bool,
    pub guarded_fragment: Option<FragmentId>,
    /// Last time the roster saw this drone active.
    pub last_active_ms: f64,
    pub orientation: Quat,
}

impl Drone {
    pub fn is_pursuing(&self) -> bool {
        self.mode == DroneMode::Pursuit
    }
}

impl Default for Drone {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            patrol_target: Vec3::ZERO,
            role: DroneRole::Patrol,
            mode: DroneMode::Patrol,
            active: false,
            guarded_fragment: None,
            last_active_ms: 0.0,
            orientation: Quat::IDENTITY,
        }
    }
}

/// One particle of an explosion burst.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Offset from the burst origin.
    pub offset: Vec3,
    /// Units per second.
    pub velocity: Vec3,
}

/// A transient particle burst.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplosionEffect {
    pub origin: Vec3,
    pub particles: Vec<Particle>,
    pub opacity: f32,
    pub scale: f32,
    pub active: bool,
}
