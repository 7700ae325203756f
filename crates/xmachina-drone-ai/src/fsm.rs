//! Drone behaviour finite state machine.
//!
//! Pure functions that compute mode transitions, steering and orientation
//! for a single drone from its situation. No pool or engine dependency:
//! operates on plain data.

use glam::{Quat, Vec3};

use xmachina_core::config::Tuning;
use xmachina_core::constants::*;
use xmachina_core::enums::DroneMode;

/// Behaviour parameters, usually derived from [`Tuning`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroneParams {
    /// Patrol -> Pursuit below this distance.
    pub detection_radius: f32,
    /// Pursuit -> Patrol above this distance.
    pub release_radius: f32,
    pub patrol_speed: f32,
    pub pursuit_speed: f32,
}

impl DroneParams {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            detection_radius: tuning.drone_detection_radius,
            release_radius: tuning.drone_release_radius(),
            patrol_speed: tuning.drone_patrol_speed,
            pursuit_speed: tuning.drone_pursuit_speed,
        }
    }
}

impl Default for DroneParams {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}

/// Input to the FSM for one drone.
pub struct DroneContext {
    pub mode: DroneMode,
    pub position: Vec3,
    pub patrol_target: Vec3,
    pub player_position: Vec3,
    pub orientation: Quat,
}

/// Output from the FSM.
pub struct DroneUpdate {
    pub new_mode: DroneMode,
    pub mode_changed: bool,
    /// Displacement for this tick.
    pub velocity: Vec3,
    /// Position after applying `velocity` and the height clamp.
    pub new_position: Vec3,
    pub orientation: Quat,
    /// The drone is patrolling and has reached its waypoint; the caller
    /// should pick a new one.
    pub reached_patrol_target: bool,
}

/// Apply the hysteresis band to the current mode.
///
/// Inside `(detection_radius, release_radius]` the mode never changes.
pub fn next_mode(mode: DroneMode, distance_to_player: f32, params: &DroneParams) -> DroneMode {
    match mode {
        DroneMode::Patrol if distance_to_player < params.detection_radius => DroneMode::Pursuit,
        DroneMode::Pursuit if distance_to_player > params.release_radius => DroneMode::Patrol,
        unchanged => unchanged,
    }
}

/// Evaluate one tick of behaviour for a drone that passed the visibility gate.
pub fn evaluate(ctx: &DroneContext, params: &DroneParams) -> DroneUpdate {
    let distance_to_player = ctx.position.distance(ctx.player_position);
    let new_mode = next_mode(ctx.mode, distance_to_player, params);

    let (goal, speed) = match new_mode {
        DroneMode::Pursuit => (ctx.player_position, params.pursuit_speed),
        DroneMode::Patrol => (ctx.patrol_target, params.patrol_speed),
    };

    let reached_patrol_target = new_mode == DroneMode::Patrol
        && ctx.position.distance(ctx.patrol_target) < DRONE_ARRIVAL_RADIUS;

    let velocity = (goal - ctx.position).normalize_or_zero() * speed;
    let new_position = clamp_height(ctx.position + velocity);
    let orientation = face_along(ctx.orientation, velocity, DRONE_TURN_FACTOR);

    DroneUpdate {
        new_mode,
        mode_changed: new_mode != ctx.mode,
        velocity,
        new_position,
        orientation,
        reached_patrol_target,
    }
}

/// Keep a drone inside its flight band.
pub fn clamp_height(position: Vec3) -> Vec3 {
    Vec3::new(
        position.x,
        position.y.clamp(DRONE_MIN_HEIGHT, DRONE_MAX_HEIGHT),
        position.z,
    )
}

/// Turn `current` a fraction of the way toward facing `velocity`.
///
/// Forward is -Z. Near-zero velocity keeps the current orientation.
pub fn face_along(current: Quat, velocity: Vec3, factor: f32) -> Quat {
    if velocity.length() <= DRONE_MIN_TURN_SPEED {
        return current;
    }
    let target = Quat::from_rotation_arc(Vec3::NEG_Z, velocity.normalize());
    current.slerp(target, factor).normalize()
}
