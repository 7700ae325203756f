#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use xmachina_core::constants::*;
    use xmachina_core::enums::DroneMode;

    use crate::fsm::{clamp_height, evaluate, face_along, next_mode, DroneContext, DroneParams};
    use crate::placement::{guard_placement, next_patrol_target, patrol_placement};

    fn make_context(mode: DroneMode, drone: Vec3, player: Vec3, target: Vec3) -> DroneContext {
        DroneContext {
            mode,
            position: drone,
            patrol_target: target,
            player_position: player,
            orientation: Quat::IDENTITY,
        }
    }

    #[test]
    fn test_patrol_enters_pursuit_just_inside_detection() {
        let params = DroneParams::default();
        let mode = next_mode(DroneMode::Patrol, DRONE_DETECTION_RADIUS - 0.001, &params);
        assert_eq!(mode, DroneMode::Pursuit);
    }

    #[test]
    fn test_patrol_stays_at_detection_boundary() {
        let params = DroneParams::default();
        let mode = next_mode(DroneMode::Patrol, DRONE_DETECTION_RADIUS, &params);
        assert_eq!(mode, DroneMode::Patrol);
    }

    /// Neither mode changes anywhere inside the hysteresis band.
    #[test]
    fn test_no_transition_inside_hysteresis_band() {
        let params = DroneParams::default();
        let release = DRONE_DETECTION_RADIUS * DRONE_PURSUIT_RELEASE_FACTOR;
        let steps = 50;
        for i in 0..=steps {
            let d = DRONE_DETECTION_RADIUS + (release - DRONE_DETECTION_RADIUS) * i as f32 / steps as f32;
            assert_eq!(
                next_mode(DroneMode::Pursuit, d, &params),
                DroneMode::Pursuit,
                "pursuit dropped at {d}"
            );
            assert_eq!(
                next_mode(DroneMode::Patrol, d, &params),
                DroneMode::Patrol,
                "patrol engaged at {d}"
            );
        }
    }

    #[test]
    fn test_pursuit_released_beyond_band() {
        let params = DroneParams::default();
        let release = DRONE_DETECTION_RADIUS * DRONE_PURSUIT_RELEASE_FACTOR;
        let mode = next_mode(DroneMode::Pursuit, release + 0.01, &params);
        assert_eq!(mode, DroneMode::Patrol);
    }

    #[test]
    fn test_pursuit_moves_toward_player_at_pursuit_speed() {
        let ctx = make_context(
            DroneMode::Patrol,
            Vec3::new(0.0, 30.0, 0.0),
            Vec3::new(10.0, 30.0, 0.0),
            Vec3::new(-200.0, 30.0, 0.0),
        );
        let update = evaluate(&ctx, &DroneParams::default());
        assert!(update.mode_changed);
        assert_eq!(update.new_mode, DroneMode::Pursuit);
        assert!((update.velocity.length() - DRONE_PURSUIT_SPEED).abs() < 1e-5);
        assert!(update.velocity.x > 0.0, "should head for the player");
        assert!((update.new_position.x - DRONE_PURSUIT_SPEED).abs() < 1e-5);
    }

    #[test]
    fn test_patrol_moves_toward_waypoint_at_patrol_speed() {
        let ctx = make_context(
            DroneMode::Patrol,
            Vec3::new(0.0, 30.0, 0.0),
            Vec3::new(400.0, 30.0, 400.0),
            Vec3::new(0.0, 30.0, -100.0),
        );
        let update = evaluate(&ctx, &DroneParams::default());
        assert!(!update.mode_changed);
        assert!((update.velocity.length() - DRONE_PATROL_SPEED).abs() < 1e-5);
        assert!(update.velocity.z < 0.0);
        assert!(!update.reached_patrol_target);
    }

    #[test]
    fn test_arrival_requests_new_waypoint() {
        let ctx = make_context(
            DroneMode::Patrol,
            Vec3::new(0.0, 30.0, 0.0),
            Vec3::new(400.0, 30.0, 400.0),
            Vec3::new(0.0, 30.0, 4.0),
        );
        let update = evaluate(&ctx, &DroneParams::default());
        assert!(update.reached_patrol_target);
    }

    #[test]
    fn test_pursuing_drone_ignores_waypoint_arrival() {
        let ctx = make_context(
            DroneMode::Pursuit,
            Vec3::new(0.0, 30.0, 0.0),
            Vec3::new(20.0, 30.0, 0.0),
            Vec3::new(0.0, 30.0, 1.0),
        );
        let update = evaluate(&ctx, &DroneParams::default());
        assert!(!update.reached_patrol_target);
    }

    #[test]
    fn test_height_is_clamped() {
        assert_eq!(clamp_height(Vec3::new(1.0, -3.0, 2.0)).y, DRONE_MIN_HEIGHT);
        assert_eq!(clamp_height(Vec3::new(1.0, 500.0, 2.0)).y, DRONE_MAX_HEIGHT);
        assert_eq!(clamp_height(Vec3::new(1.0, 42.0, 2.0)).y, 42.0);

        // Player below the band: the drone dives but stops at the floor.
        let ctx = make_context(
            DroneMode::Pursuit,
            Vec3::new(0.0, DRONE_MIN_HEIGHT, 0.0),
            Vec3::new(0.0, -20.0, 0.0),
            Vec3::ZERO,
        );
        let update = evaluate(&ctx, &DroneParams::default());
        assert_eq!(update.new_position.y, DRONE_MIN_HEIGHT);
    }

    #[test]
    fn test_orientation_turns_gradually() {
        let velocity = Vec3::X;
        let turned = face_along(Quat::IDENTITY, velocity, DRONE_TURN_FACTOR);
        let facing = turned * Vec3::NEG_Z;
        // Partway between -Z and +X, closer to where it started.
        assert!(facing.x > 0.0 && facing.x < 0.5, "facing {facing:?}");

        let mut q = Quat::IDENTITY;
        for _ in 0..200 {
            q = face_along(q, velocity, DRONE_TURN_FACTOR);
        }
        assert!(((q * Vec3::NEG_Z) - Vec3::X).length() < 1e-3);
    }

    #[test]
    fn test_orientation_kept_when_hovering() {
        let q = Quat::from_rotation_y(0.7);
        assert_eq!(face_along(q, Vec3::splat(0.001), DRONE_TURN_FACTOR), q);
    }

    #[test]
    fn test_guard_placement_orbits_fragment() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let fragment = Vec3::new(100.0, 20.0, -50.0);
        for _ in 0..100 {
            let p = guard_placement(&mut rng, fragment);
            let offset = p.position - fragment;
            assert!(offset.x.abs() <= GUARD_OFFSET_XZ + 1e-4 && offset.z.abs() <= GUARD_OFFSET_XZ + 1e-4);
            assert!(offset.y >= GUARD_LIFT_Y - GUARD_OFFSET_Y - 1e-4);
            assert!(offset.y <= GUARD_LIFT_Y + GUARD_OFFSET_Y + 1e-4);
            // Waypoint mirrored through the fragment on the ground plane.
            assert!((p.patrol_target.x - (fragment.x - offset.x)).abs() < 1e-4);
            assert!((p.patrol_target.z - (fragment.z - offset.z)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_patrol_placement_within_city() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let half = CITY_SIZE / 2.0;
        for _ in 0..200 {
            let p = patrol_placement(&mut rng, CITY_SIZE);
            for point in [p.position, p.patrol_target] {
                assert!(point.x.abs() <= half && point.z.abs() <= half);
                assert!(point.y >= DRONE_SPAWN_MIN_HEIGHT && point.y <= DRONE_SPAWN_MAX_HEIGHT);
            }
            let target = next_patrol_target(&mut rng, CITY_SIZE);
            assert!(target.y >= DRONE_RETARGET_MIN_HEIGHT && target.y <= DRONE_RETARGET_MAX_HEIGHT);
        }
    }
}
