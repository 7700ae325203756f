//! Simulation constants and default tuning parameters.
//!
//! Distances are world units, times are milliseconds unless the name says
//! otherwise. Drone speeds are per tick, projectile speed is per second.

// --- World ---

/// Edge length of the square city area, centered on the origin.
pub const CITY_SIZE: f32 = 500.0;

/// Number of buildings the city generator attempts to place.
pub const BUILDING_COUNT: usize = 100;

/// Width of the two energy-conduit corridors kept free of buildings.
pub const ENERGY_CONDUIT_WIDTH: f32 = 30.0;

/// Building footprint side range (width and depth drawn independently).
pub const BUILDING_MIN_FOOTPRINT: f32 = 5.0;
pub const BUILDING_MAX_FOOTPRINT: f32 = 20.0;

pub const BUILDING_MIN_HEIGHT: f32 = 10.0;
pub const BUILDING_MAX_HEIGHT: f32 = 100.0;

/// Positions tried per building before it is skipped.
pub const BUILDING_PLACEMENT_ATTEMPTS: u32 = 50;

/// Positions tried per fragment before it is skipped.
pub const FRAGMENT_PLACEMENT_ATTEMPTS: u32 = 500;

/// Number of data fragments per level.
pub const DATA_FRAGMENT_COUNT: usize = 20;

// --- Player ---

pub const PLAYER_INITIAL_HEALTH: f32 = 100.0;

/// Approximate ship collision radius.
pub const SHIP_RADIUS: f32 = 2.0;

/// Distance from ship center to its underside.
pub const SHIP_HALF_HEIGHT: f32 = 1.0;

/// Spawn point is above the conduit crossing at the origin.
pub const SHIP_START_HEIGHT: f32 = 10.0;
/// Spawn heading in radians (facing -Z).
pub const SHIP_START_HEADING: f32 = std::f32::consts::PI;

pub const SHIP_MIN_HEIGHT: f32 = 5.0;
pub const SHIP_MAX_HEIGHT: f32 = 120.0;

/// Minimum time between two damage applications.
pub const DAMAGE_COOLDOWN_MS: f64 = 1000.0;

/// Invincibility window after taking damage.
pub const INVINCIBILITY_MS: f64 = 2000.0;

pub const BUILDING_COLLISION_DAMAGE: f32 = 10.0;

/// Buildings farther than this from the ship are skipped by collision scans.
pub const BUILDING_SCAN_RADIUS: f32 = 50.0;

// --- Weapon / projectiles ---

pub const PROJECTILE_POOL_SIZE: usize = 30;
pub const PROJECTILE_SPEED: f32 = 100.0;
pub const PROJECTILE_LIFETIME_MS: f64 = 3000.0;

/// Beyond this distance from the player a projectile skips hit tests.
pub const PROJECTILE_MAX_DISTANCE: f32 = 200.0;

/// Wider than the drone model so fast projectiles cannot step over a target.
pub const PROJECTILE_HITBOX_RADIUS: f32 = 8.0;

/// Bounding sphere used for projectile frustum tests.
pub const PROJECTILE_CULL_RADIUS: f32 = 5.0;

pub const WEAPON_COOLDOWN_MS: f64 = 300.0;

// --- Drones ---

pub const DRONE_POOL_SIZE: usize = 20;
pub const DRONE_TARGET_COUNT: usize = 15;

/// Upper bound on guard drones assigned per roster pass.
pub const DRONE_MAX_GUARDS: usize = 5;

pub const DRONE_PATROL_SPEED: f32 = 0.3;
pub const DRONE_PURSUIT_SPEED: f32 = 0.8;
pub const DRONE_DETECTION_RADIUS: f32 = 40.0;

/// Pursuit is dropped only beyond `DRONE_DETECTION_RADIUS * DRONE_PURSUIT_RELEASE_FACTOR`.
pub const DRONE_PURSUIT_RELEASE_FACTOR: f32 = 1.5;

/// Reaching within this distance of the patrol target picks a new one.
pub const DRONE_ARRIVAL_RADIUS: f32 = 5.0;

pub const DRONE_MIN_HEIGHT: f32 = 5.0;
pub const DRONE_MAX_HEIGHT: f32 = 80.0;

/// Spawn height band for patrol drones.
pub const DRONE_SPAWN_MIN_HEIGHT: f32 = 20.0;
pub const DRONE_SPAWN_MAX_HEIGHT: f32 = 60.0;

/// Height band for re-picked patrol targets.
pub const DRONE_RETARGET_MIN_HEIGHT: f32 = 10.0;
pub const DRONE_RETARGET_MAX_HEIGHT: f32 = 60.0;

/// Horizontal half-extent of the guard spawn offset cube.
pub const GUARD_OFFSET_XZ: f32 = 4.0;

/// Vertical half-extent and lift of the guard spawn offset.
pub const GUARD_OFFSET_Y: f32 = 2.5;
pub const GUARD_LIFT_Y: f32 = 3.0;

/// Slerp factor applied per tick toward the direction of travel.
pub const DRONE_TURN_FACTOR: f32 = 0.1;

/// Below this speed a drone keeps its current orientation.
pub const DRONE_MIN_TURN_SPEED: f32 = 0.01;

pub const DRONE_COLLISION_RADIUS: f32 = 3.0;
pub const DRONE_COLLISION_DAMAGE: f32 = 20.0;

/// Bounding sphere used for drone frustum tests.
pub const DRONE_CULL_RADIUS: f32 = 5.0;

/// Beyond this distance from the player a drone is not simulated.
pub const DRONE_VISIBLE_RADIUS: f32 = 150.0;

/// Drones not refreshed for this long are reclaimed by the staleness sweep.
pub const DRONE_STALE_MS: f64 = 60_000.0;

/// Consecutive empty roster passes before the staleness sweep runs.
pub const DRONE_STALE_SWEEP_AFTER_FAILURES: u32 = 3;

// --- Explosions ---

pub const EXPLOSION_POOL_SIZE: usize = 20;
pub const EXPLOSION_PARTICLE_COUNT: usize = 30;
pub const EXPLOSION_MIN_PARTICLE_SPEED: f32 = 5.0;
pub const EXPLOSION_MAX_PARTICLE_SPEED: f32 = 15.0;

/// Opacity lost per second.
pub const EXPLOSION_FADE_RATE: f32 = 1.5;

/// Scale gained per second.
pub const EXPLOSION_GROWTH_RATE: f32 = 6.0;

// --- Fragments / score ---

pub const FRAGMENT_COLLECT_RADIUS: f32 = 3.0;
pub const FRAGMENT_BASE_POINTS: f32 = 10.0;
pub const FRAGMENT_MIN_HEIGHT: f32 = 5.0;
pub const FRAGMENT_MAX_HEIGHT: f32 = 45.0;

/// Pickups closer together than this grow the multiplier.
pub const MULTIPLIER_CHAIN_WINDOW_MS: f64 = 5000.0;

/// Idle time before the multiplier starts decaying.
pub const MULTIPLIER_DECAY_DELAY_MS: f64 = 3000.0;

/// Multiplier lost per second while decaying.
pub const MULTIPLIER_DECAY_RATE: f32 = 0.5;

pub const MULTIPLIER_STEP: f32 = 0.5;
pub const MAX_MULTIPLIER: f32 = 5.0;

// --- Camera ---

pub const CAMERA_FOV_Y_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Nominal frame time used by the headless runner.
pub const NOMINAL_DT_SECS: f32 = 1.0 / 60.0;
