//! Per-tick visibility gate.
//!
//! Entities outside the camera frustum or too far from the player are not
//! simulated. The gate is computed once at the start of a tick and only read
//! afterwards; relevance is a query result, never a flag stored on entities.

use glam::Vec3;

use xmachina_core::components::{Drone, Projectile};
use xmachina_core::types::{CameraParams, Fragment};

use crate::frustum::Frustum;

/// Anything with a world position the gate can judge.
pub trait Located {
    fn location(&self) -> Vec3;
}

impl Located for Vec3 {
    fn location(&self) -> Vec3 {
        *self
    }
}

impl Located for Drone {
    fn location(&self) -> Vec3 {
        self.position
    }
}

impl Located for Projectile {
    fn location(&self) -> Vec3 {
        self.position
    }
}

impl Located for Fragment {
    fn location(&self) -> Vec3 {
        self.position
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> Vec3 {
        (**self).location()
    }
}

impl<K, T: Located> Located for (K, T) {
    fn location(&self) -> Vec3 {
        self.1.location()
    }
}

/// Frustum plus player position for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityGate {
    pub frustum: Frustum,
    pub player_position: Vec3,
}

impl VisibilityGate {
    pub fn compute(camera: &CameraParams, player_position: Vec3) -> Self {
        Self {
            frustum: Frustum::from_camera(camera),
            player_position,
        }
    }

    /// Whether a sphere at `position` should be simulated this tick.
    pub fn admits(&self, position: Vec3, radius: f32, max_distance: f32) -> bool {
        is_relevant(
            &self.frustum,
            position,
            radius,
            self.player_position,
            max_distance,
        )
    }
}

/// Distance cutoff first, then the frustum test.
pub fn is_relevant(
    frustum: &Frustum,
    position: Vec3,
    radius: f32,
    player_position: Vec3,
    max_distance: f32,
) -> bool {
    if position.distance(player_position) > max_distance {
        return false;
    }
    frustum.intersects_sphere(position, radius)
}

/// Lazily keep only the entities the gate admits.
pub fn relevant_entities<'a, I>(
    entities: I,
    gate: &'a VisibilityGate,
    radius: f32,
    max_distance: f32,
) -> impl Iterator<Item = I::Item> + 'a
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: Located,
{
    entities
        .into_iter()
        .filter(move |entity| gate.admits(entity.location(), radius, max_distance))
}
