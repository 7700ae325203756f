//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Simulation time tracking. The clock only moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one tick of `dt_secs` seconds.
    pub fn advance(&mut self, dt_secs: f32) {
        self.tick += 1;
        self.elapsed_ms += f64::from(dt_secs) * 1000.0;
    }

    pub fn now_ms(&self) -> f64 {
        self.elapsed_ms
    }
}

/// Static obstacle: an axis-aligned box centered on `(x, z)`, spanning
/// `[0, height]` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub x: f32,
    pub z: f32,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Building {
    pub fn new(x: f32, z: f32, width: f32, height: f32, depth: f32) -> Self {
        Self {
            x,
            z,
            width,
            height,
            depth,
        }
    }

    /// Center of the box volume.
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.x, self.height / 2.0, self.z)
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_depth(&self) -> f32 {
        self.depth / 2.0
    }

    /// Minimum corner of the box.
    pub fn min(&self) -> Vec3 {
        Vec3::new(self.x - self.half_width(), 0.0, self.z - self.half_depth())
    }

    /// Maximum corner of the box.
    pub fn max(&self) -> Vec3 {
        Vec3::new(
            self.x + self.half_width(),
            self.height,
            self.z + self.half_depth(),
        )
    }

    /// Whether two footprints overlap on the ground plane.
    pub fn footprint_overlaps(&self, other: &Building) -> bool {
        self.x + self.half_width() > other.x - other.half_width()
            && self.x - self.half_width() < other.x + other.half_width()
            && self.z + self.half_depth() > other.z - other.half_depth()
            && self.z - self.half_depth() < other.z + other.half_depth()
    }
}

/// Stable identifier of a data fragment within one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FragmentId(pub u32);

/// A collectible data fragment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub id: FragmentId,
    pub position: Vec3,
    pub collected: bool,
}

/// Perspective camera parameters supplied by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraParams {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraParams {
    /// Camera at `eye` looking at `target` with the default lens.
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        use crate::constants::*;
        Self {
            eye,
            target,
            up: Vec3::Y,
            fov_y: CAMERA_FOV_Y_DEGREES.to_radians(),
            aspect: 16.0 / 9.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }

    /// Chase camera placed behind and above a ship with the given heading
    /// (radians around +Y, 0 = facing +Z).
    pub fn chase(ship: Vec3, heading: f32) -> Self {
        let forward = Vec3::new(heading.sin(), 0.0, heading.cos());
        let eye = ship - forward * 10.0 + Vec3::Y * 3.0;
        Self::looking_at(eye, ship + forward * 10.0)
    }
}

impl Default for CameraParams {
    fn default() -> Self {
        Self::chase(Vec3::new(0.0, 20.0, 0.0), 0.0)
    }
}
