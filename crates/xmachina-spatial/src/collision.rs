//! Collision queries against the static city and between entities.

use glam::Vec3;

use xmachina_core::constants::{BUILDING_SCAN_RADIUS, SHIP_HALF_HEIGHT};
use xmachina_core::types::Building;

/// Volume tests on a building's axis-aligned box.
pub trait BuildingQueries {
    fn contains_point(&self, point: Vec3) -> bool;
    fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool;
}

impl BuildingQueries for Building {
    fn contains_point(&self, point: Vec3) -> bool {
        let min = self.min();
        let max = self.max();
        point.cmpge(min).all() && point.cmple(max).all()
    }

    fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        let closest = center.clamp(self.min(), self.max());
        closest.distance_squared(center) <= radius * radius
    }
}

/// Whether the ship at `ship_position` is inside any nearby building.
///
/// Buildings whose center is more than 50 units away are skipped. A hit needs
/// the ship's horizontal position inside the footprint grown by
/// `ship_radius`, and the ship's underside below the roof.
pub fn ship_collides_building(ship_position: Vec3, ship_radius: f32, buildings: &[Building]) -> bool {
    let underside = ship_position.y - SHIP_HALF_HEIGHT;
    buildings.iter().any(|building| {
        if building.center().distance(ship_position) > BUILDING_SCAN_RADIUS {
            return false;
        }
        let dx = (ship_position.x - building.x).abs();
        let dz = (ship_position.z - building.z).abs();
        dx < building.half_width() + ship_radius
            && dz < building.half_depth() + ship_radius
            && underside < building.height
    })
}

/// Strict proximity test used for pickups, hits and contact.
pub fn within_radius(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}
