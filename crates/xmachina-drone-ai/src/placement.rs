//! Role-driven spawn placement.
//!
//! Guard drones start in a small cube around a fragment with their first
//! waypoint mirrored through it, so they orbit the fragment. Patrol drones
//! start anywhere in the city.

use glam::Vec3;
use rand::Rng;

use xmachina_core::constants::*;

/// Starting position and first waypoint for a new drone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub patrol_target: Vec3,
}

/// Place a guard drone near `fragment`.
pub fn guard_placement<R: Rng>(rng: &mut R, fragment: Vec3) -> Placement {
    let offset_x = rng.gen_range(-GUARD_OFFSET_XZ..GUARD_OFFSET_XZ);
    let offset_y = rng.gen_range(-GUARD_OFFSET_Y..GUARD_OFFSET_Y) + GUARD_LIFT_Y;
    let offset_z = rng.gen_range(-GUARD_OFFSET_XZ..GUARD_OFFSET_XZ);

    Placement {
        position: fragment + Vec3::new(offset_x, offset_y, offset_z),
        patrol_target: Vec3::new(
            fragment.x - offset_x,
            fragment.y + rng.gen_range(0.0..GUARD_LIFT_Y),
            fragment.z - offset_z,
        ),
    }
}

/// Place a patrol drone uniformly inside the city at spawn height.
pub fn patrol_placement<R: Rng>(rng: &mut R, city_size: f32) -> Placement {
    Placement {
        position: random_point(
            rng,
            city_size,
            DRONE_SPAWN_MIN_HEIGHT,
            DRONE_SPAWN_MAX_HEIGHT,
        ),
        patrol_target: random_point(
            rng,
            city_size,
            DRONE_SPAWN_MIN_HEIGHT,
            DRONE_SPAWN_MAX_HEIGHT,
        ),
    }
}

/// New waypoint for a drone that reached its previous one.
pub fn next_patrol_target<R: Rng>(rng: &mut R, city_size: f32) -> Vec3 {
    random_point(
        rng,
        city_size,
        DRONE_RETARGET_MIN_HEIGHT,
        DRONE_RETARGET_MAX_HEIGHT,
    )
}

fn random_point<R: Rng>(rng: &mut R, city_size: f32, min_y: f32, max_y: f32) -> Vec3 {
    let half = city_size / 2.0;
    Vec3::new(
        rng.gen_range(-half..half),
        rng.gen_range(min_y..max_y),
        rng.gen_range(-half..half),
    )
}
