#[cfg(test)]
mod tests {
    use glam::Vec3;

    use xmachina_core::components::Drone;
    use xmachina_core::constants::*;
    use xmachina_core::types::{Building, CameraParams};

    use crate::collision::{ship_collides_building, within_radius, BuildingQueries};
    use crate::frustum::Frustum;
    use crate::visibility::{is_relevant, relevant_entities, VisibilityGate};

    fn forward_camera() -> CameraParams {
        // Eye at the origin looking down -Z.
        CameraParams::looking_at(Vec3::ZERO, Vec3::NEG_Z)
    }

    #[test]
    fn test_frustum_planes_normalized() {
        let frustum = Frustum::from_camera(&forward_camera());
        for plane in &frustum.planes {
            assert!((plane.normal.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_frustum_front_and_back() {
        let frustum = Frustum::from_camera(&forward_camera());
        assert!(frustum.contains_point(Vec3::new(0.0, 0.0, -50.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 50.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -CAMERA_FAR - 10.0)));
    }

    #[test]
    fn test_sphere_straddling_edge_is_visible() {
        let frustum = Frustum::from_camera(&forward_camera());
        // Top edge at z = -10 is at y = 10 * tan(37.5deg), about 7.67.
        let center = Vec3::new(0.0, 9.0, -10.0);
        assert!(!frustum.contains_point(center));
        assert!(frustum.intersects_sphere(center, 5.0));
        assert!(!frustum.intersects_sphere(center, 0.5));
    }

    #[test]
    fn test_chase_camera_sees_ahead_of_ship() {
        let ship = Vec3::new(0.0, 20.0, 0.0);
        let frustum = Frustum::from_camera(&CameraParams::chase(ship, 0.0));
        assert!(frustum.contains_point(Vec3::new(0.0, 20.0, 60.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 20.0, -60.0)));
    }

    #[test]
    fn test_gate_distance_cutoff_beats_frustum() {
        let player = Vec3::ZERO;
        let gate = VisibilityGate::compute(&forward_camera(), player);
        let inside_range = Vec3::new(0.0, 0.0, -DRONE_VISIBLE_RADIUS + 1.0);
        let beyond_range = Vec3::new(0.0, 0.0, -DRONE_VISIBLE_RADIUS - 1.0);

        assert!(gate.frustum.contains_point(beyond_range));
        assert!(gate.admits(inside_range, DRONE_CULL_RADIUS, DRONE_VISIBLE_RADIUS));
        assert!(!gate.admits(beyond_range, DRONE_CULL_RADIUS, DRONE_VISIBLE_RADIUS));
        assert!(!is_relevant(
            &gate.frustum,
            beyond_range,
            DRONE_CULL_RADIUS,
            player,
            DRONE_VISIBLE_RADIUS
        ));
    }

    #[test]
    fn test_relevant_entities_filters_lazily() {
        let gate = VisibilityGate::compute(&forward_camera(), Vec3::ZERO);
        let drones: Vec<Drone> = [
            Vec3::new(0.0, 0.0, -20.0),
            Vec3::new(0.0, 0.0, 20.0),
            Vec3::new(0.0, 0.0, -500.0),
            Vec3::new(5.0, 2.0, -40.0),
        ]
        .into_iter()
        .map(|position| Drone {
            position,
            active: true,
            ..Drone::default()
        })
        .collect();

        let visible: Vec<usize> = relevant_entities(
            drones.iter().enumerate(),
            &gate,
            DRONE_CULL_RADIUS,
            DRONE_VISIBLE_RADIUS,
        )
        .map(|(i, _)| i)
        .collect();
        assert_eq!(visible, vec![0, 3]);
        // Nothing about the drones themselves changed.
        assert!(drones.iter().all(|d| d.active));
    }

    #[test]
    fn test_building_point_and_sphere() {
        let b = Building::new(10.0, -10.0, 8.0, 30.0, 4.0);
        assert!(b.contains_point(Vec3::new(12.0, 29.0, -9.0)));
        assert!(!b.contains_point(Vec3::new(12.0, 31.0, -9.0)));
        assert!(!b.contains_point(Vec3::new(15.0, 10.0, -10.0)));

        assert!(b.intersects_sphere(Vec3::new(16.0, 10.0, -10.0), 3.0));
        assert!(!b.intersects_sphere(Vec3::new(16.0, 10.0, -10.0), 1.5));
        assert!(b.intersects_sphere(Vec3::new(10.0, 32.0, -10.0), 2.5));
    }

    #[test]
    fn test_ship_inside_footprint_below_roof_collides() {
        let buildings = [Building::new(0.0, 0.0, 10.0, 30.0, 10.0)];
        assert!(ship_collides_building(Vec3::new(0.0, 25.0, 0.0), SHIP_RADIUS, &buildings));
        // Ship radius grows the footprint.
        assert!(ship_collides_building(Vec3::new(6.5, 20.0, 0.0), SHIP_RADIUS, &buildings));
        assert!(!ship_collides_building(Vec3::new(7.5, 20.0, 0.0), SHIP_RADIUS, &buildings));
    }

    #[test]
    fn test_ship_clears_roof() {
        let buildings = [Building::new(0.0, 0.0, 10.0, 30.0, 10.0)];
        // Underside exactly at the roof does not collide.
        assert!(!ship_collides_building(
            Vec3::new(0.0, 30.0 + SHIP_HALF_HEIGHT, 0.0),
            SHIP_RADIUS,
            &buildings
        ));
        assert!(ship_collides_building(
            Vec3::new(0.0, 30.0 + SHIP_HALF_HEIGHT - 0.1, 0.0),
            SHIP_RADIUS,
            &buildings
        ));
    }

    #[test]
    fn test_distant_buildings_ignored() {
        let buildings = [
            Building::new(200.0, 200.0, 10.0, 30.0, 10.0),
            Building::new(-150.0, 0.0, 10.0, 30.0, 10.0),
        ];
        assert!(!ship_collides_building(Vec3::new(0.0, 10.0, 0.0), SHIP_RADIUS, &buildings));
        assert!(!ship_collides_building(Vec3::new(0.0, 10.0, 0.0), SHIP_RADIUS, &[]));
    }

    #[test]
    fn test_within_radius_is_strict() {
        let a = Vec3::ZERO;
        assert!(within_radius(a, Vec3::new(2.9, 0.0, 0.0), 3.0));
        assert!(!within_radius(a, Vec3::new(3.0, 0.0, 0.0), 3.0));
    }
}
