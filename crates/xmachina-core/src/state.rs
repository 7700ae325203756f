//! Game state snapshot: everything the renderer and UI mirror after a tick.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::PoolHandle;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{FragmentId, SimTime};

/// Complete visible state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub drones: Vec<DroneView>,
    pub projectiles: Vec<ProjectileView>,
    pub explosions: Vec<ExplosionView>,
    pub fragments: Vec<FragmentView>,
    pub score: ScoreView,
    pub weapon: WeaponView,
    pub pools: PoolDiagnostics,
    pub events: Vec<GameEvent>,
}

/// Player ship status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub heading: f32,
    pub health: f32,
    pub invincible: bool,
}

/// An active drone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneView {
    pub handle: PoolHandle,
    pub position: Vec3,
    pub orientation: Quat,
    pub role: DroneRole,
    pub mode: DroneMode,
    pub guarded_fragment: Option<FragmentId>,
}

/// An in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub handle: PoolHandle,
    pub position: Vec3,
    pub direction: Vec3,
}

/// An active explosion effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub origin: Vec3,
    pub opacity: f32,
    pub scale: f32,
    /// World-space particle positions.
    pub particles: Vec<Vec3>,
}

/// An uncollected fragment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FragmentView {
    pub id: FragmentId,
    pub position: Vec3,
    pub guarded: bool,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub multiplier: f32,
    pub fragments_collected: u32,
    pub fragments_total: u32,
    pub drones_destroyed: u32,
    pub shots_fired: u32,
}

/// Weapon readiness for the cooldown bar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub ready: bool,
    /// 0.0 right after firing, 1.0 when ready.
    pub charge: f32,
}

/// Occupancy of one pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    pub active: usize,
    pub available: usize,
    pub total: usize,
}

/// Occupancy of every pool, for the debug panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolDiagnostics {
    pub projectiles: PoolStats,
    pub drones: PoolStats,
    pub explosions: PoolStats,
}
