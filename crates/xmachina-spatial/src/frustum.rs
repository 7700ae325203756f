//! View frustum extracted from a perspective camera.

use glam::{Mat4, Vec3, Vec4};

use xmachina_core::types::CameraParams;

/// A plane `n . p + d = 0` with unit normal pointing into the frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    /// Normalize a raw `(a, b, c, d)` row combination.
    fn from_row(row: Vec4) -> Self {
        let normal = row.truncate();
        let len = normal.length();
        if len <= f32::EPSILON {
            return Self { normal, d: row.w };
        }
        Self {
            normal: normal / len,
            d: row.w / len,
        }
    }

    /// Signed distance; positive on the inside.
    pub fn distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }
}

/// Six clipping planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Build the frustum for a right-handed camera with `[0, 1]` clip depth.
    pub fn from_camera(camera: &CameraParams) -> Self {
        let projection = Mat4::perspective_rh(camera.fov_y, camera.aspect, camera.near, camera.far);
        let view = Mat4::look_at_rh(camera.eye, camera.target, camera.up);
        Self::from_view_projection(&(projection * view))
    }

    /// Extract planes from a combined view-projection matrix.
    ///
    /// A clip-space point is inside when `-w <= x <= w`, `-w <= y <= w` and
    /// `0 <= z <= w`; each inequality becomes one plane.
    pub fn from_view_projection(m: &Mat4) -> Self {
        let r0 = m.row(0);
        let r1 = m.row(1);
        let r2 = m.row(2);
        let r3 = m.row(3);
        Self {
            planes: [
                Plane::from_row(r3 + r0),
                Plane::from_row(r3 - r0),
                Plane::from_row(r3 + r1),
                Plane::from_row(r3 - r1),
                Plane::from_row(r2),
                Plane::from_row(r3 - r2),
            ],
        }
    }

    /// Whether a sphere touches the frustum. Conservative near the corners.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance(center) >= -radius)
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        self.intersects_sphere(point, 0.0)
    }
}
