//! Gameplay tuning, loadable from JSON.
//!
//! Every field defaults to the matching value in [`crate::constants`], so a
//! tuning file only needs to name what it overrides.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Tunable gameplay parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // --- World ---
    pub city_size: f32,
    pub building_count: usize,
    pub fragment_count: usize,

    // --- Player ---
    pub player_initial_health: f32,
    pub building_collision_damage: f32,
    pub damage_cooldown_ms: f64,
    pub invincibility_ms: f64,

    // --- Weapon ---
    pub projectile_pool_size: usize,
    pub projectile_speed: f32,
    pub projectile_lifetime_ms: f64,
    pub projectile_max_distance: f32,
    pub projectile_hitbox_radius: f32,
    pub weapon_cooldown_ms: f64,

    // --- Drones ---
    pub drone_pool_size: usize,
    pub drone_target_count: usize,
    pub drone_max_guards: usize,
    pub drone_patrol_speed: f32,
    pub drone_pursuit_speed: f32,
    pub drone_detection_radius: f32,
    pub drone_visible_radius: f32,
    pub drone_collision_damage: f32,
    pub drone_stale_ms: f64,

    // --- Effects ---
    pub explosion_pool_size: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            city_size: CITY_SIZE,
            building_count: BUILDING_COUNT,
            fragment_count: DATA_FRAGMENT_COUNT,
            player_initial_health: PLAYER_INITIAL_HEALTH,
            building_collision_damage: BUILDING_COLLISION_DAMAGE,
            damage_cooldown_ms: DAMAGE_COOLDOWN_MS,
            invincibility_ms: INVINCIBILITY_MS,
            projectile_pool_size: PROJECTILE_POOL_SIZE,
            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime_ms: PROJECTILE_LIFETIME_MS,
            projectile_max_distance: PROJECTILE_MAX_DISTANCE,
            projectile_hitbox_radius: PROJECTILE_HITBOX_RADIUS,
            weapon_cooldown_ms: WEAPON_COOLDOWN_MS,
            drone_pool_size: DRONE_POOL_SIZE,
            drone_target_count: DRONE_TARGET_COUNT,
            drone_max_guards: DRONE_MAX_GUARDS,
            drone_patrol_speed: DRONE_PATROL_SPEED,
            drone_pursuit_speed: DRONE_PURSUIT_SPEED,
            drone_detection_radius: DRONE_DETECTION_RADIUS,
            drone_visible_radius: DRONE_VISIBLE_RADIUS,
            drone_collision_damage: DRONE_COLLISION_DAMAGE,
            drone_stale_ms: DRONE_STALE_MS,
            explosion_pool_size: EXPLOSION_POOL_SIZE,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Distance beyond which a pursuing drone gives up.
    pub fn drone_release_radius(&self) -> f32 {
        self.drone_detection_radius * DRONE_PURSUIT_RELEASE_FACTOR
    }

    /// Reject values the systems cannot operate with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let capacities = [
            ("projectile_pool_size", self.projectile_pool_size),
            ("drone_pool_size", self.drone_pool_size),
            ("explosion_pool_size", self.explosion_pool_size),
        ];
        for (field, value) in capacities {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "pool capacity must be at least 1".to_string(),
                });
            }
        }

        let positives = [
            ("city_size", self.city_size),
            ("projectile_speed", self.projectile_speed),
            ("projectile_max_distance", self.projectile_max_distance),
            ("projectile_hitbox_radius", self.projectile_hitbox_radius),
            ("drone_patrol_speed", self.drone_patrol_speed),
            ("drone_pursuit_speed", self.drone_pursuit_speed),
            ("drone_detection_radius", self.drone_detection_radius),
            ("drone_visible_radius", self.drone_visible_radius),
            ("player_initial_health", self.player_initial_health),
        ];
        for (field, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive finite number, got {value}"),
                });
            }
        }

        let durations = [
            ("projectile_lifetime_ms", self.projectile_lifetime_ms),
            ("weapon_cooldown_ms", self.weapon_cooldown_ms),
            ("damage_cooldown_ms", self.damage_cooldown_ms),
            ("invincibility_ms", self.invincibility_ms),
            ("drone_stale_ms", self.drone_stale_ms),
        ];
        for (field, value) in durations {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a non-negative duration, got {value}"),
                });
            }
        }

        Ok(())
    }
}
