//! Player ship: health, damage windows, move resolution and weapon cooldown.

use glam::Vec3;

use xmachina_core::config::Tuning;
use xmachina_core::constants::*;
use xmachina_core::enums::DamageSource;
use xmachina_core::events::GameEvent;
use xmachina_core::types::Building;
use xmachina_spatial::collision::ship_collides_building;

/// Health plus the timers that gate further damage.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerVitals {
    pub health: f32,
    pub max_health: f32,
    /// No damage is taken before this time.
    pub invincible_until_ms: f64,
    pub last_damage_ms: Option<f64>,
    damage_cooldown_ms: f64,
    invincibility_ms: f64,
}

impl PlayerVitals {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            health: tuning.player_initial_health,
            max_health: tuning.player_initial_health,
            invincible_until_ms: 0.0,
            last_damage_ms: None,
            damage_cooldown_ms: tuning.damage_cooldown_ms,
            invincibility_ms: tuning.invincibility_ms,
        }
    }

    pub fn is_invincible(&self, now_ms: f64) -> bool {
        now_ms < self.invincible_until_ms
    }

    /// Building scrapes also respect the damage cooldown.
    pub fn can_take_building_damage(&self, now_ms: f64) -> bool {
        !self.is_invincible(now_ms)
            && self
                .last_damage_ms
                .map_or(true, |last| now_ms - last > self.damage_cooldown_ms)
    }

    /// Subtract `amount`, start the invincibility window and report it.
    pub fn apply_damage(
        &mut self,
        amount: f32,
        source: DamageSource,
        now_ms: f64,
        events: &mut Vec<GameEvent>,
    ) {
        self.health = (self.health - amount).max(0.0);
        self.last_damage_ms = Some(now_ms);
        self.invincible_until_ms = now_ms + self.invincibility_ms;
        events.push(GameEvent::DamagePlayer { amount, source });
        log::debug!("Player took {amount} damage from {source:?}, health {}", self.health);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}

/// Result of resolving one frame of ship movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipMove {
    pub position: Vec3,
    /// The proposed position was inside a building and was rejected.
    pub collided: bool,
}

/// Clamp `proposed` to the flight envelope and reject it if it hits a building.
pub fn resolve_ship_move(
    previous: Vec3,
    proposed: Vec3,
    city_size: f32,
    buildings: &[Building],
) -> ShipMove {
    let half = city_size / 2.0;
    let clamped = Vec3::new(
        proposed.x.clamp(-half, half),
        proposed.y.clamp(SHIP_MIN_HEIGHT, SHIP_MAX_HEIGHT),
        proposed.z.clamp(-half, half),
    );
    if ship_collides_building(clamped, SHIP_RADIUS, buildings) {
        ShipMove {
            position: previous,
            collided: true,
        }
    } else {
        ShipMove {
            position: clamped,
            collided: false,
        }
    }
}

/// Minimum time between shots.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponCooldown {
    cooldown_ms: f64,
    last_fired_ms: Option<f64>,
}

impl WeaponCooldown {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms,
            last_fired_ms: None,
        }
    }

    pub fn is_cooling_down(&self, now_ms: f64) -> bool {
        self.last_fired_ms
            .is_some_and(|last| now_ms - last < self.cooldown_ms)
    }

    pub fn trigger(&mut self, now_ms: f64) {
        self.last_fired_ms = Some(now_ms);
    }

    /// Charge from 0.0 right after a shot to 1.0 when ready.
    pub fn progress(&self, now_ms: f64) -> f32 {
        match self.last_fired_ms {
            Some(last) if self.cooldown_ms > 0.0 => {
                ((now_ms - last) / self.cooldown_ms).clamp(0.0, 1.0) as f32
            }
            _ => 1.0,
        }
    }

    pub fn reset(&mut self) {
        self.last_fired_ms = None;
    }
}
