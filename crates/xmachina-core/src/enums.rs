//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Spawn-placement role of a drone. Behaviour is identical for both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DroneRole {
    /// Spawned anywhere in the city.
    #[default]
    Patrol,
    /// Spawned near an unguarded data fragment.
    Guard,
}

/// Drone behaviour state while active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DroneMode {
    /// Flying toward a random waypoint.
    #[default]
    Patrol,
    /// Flying directly at the player.
    Pursuit,
}

/// Why a drone left the active roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DroneDespawnCause {
    /// Hit by a player projectile.
    Shot,
    /// Rammed the player.
    PlayerCollision,
    /// Reclaimed by the staleness sweep.
    Stale,
}

/// Why a projectile left the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileDespawnReason {
    /// Lifetime elapsed.
    Expired,
    /// Struck a drone.
    Hit,
    /// Pool cleared on restart.
    Restart,
}

/// Source of damage dealt to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageSource {
    Drone,
    Building,
}

/// Result of a fire request. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireOutcome {
    Fired,
    /// Weapon still cooling down; request ignored.
    CoolingDown,
    /// Every projectile is in flight; request dropped.
    PoolExhausted,
}

/// Top-level game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Start,
    Playing,
    Paused,
    /// All fragments collected; paused until resumed or restarted.
    LevelComplete,
    GameOver,
}
