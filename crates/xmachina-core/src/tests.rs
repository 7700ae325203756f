#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::{FrameInput, PlayerCommand};
    use crate::config::Tuning;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::{ConfigError, PoolError};
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Building, FragmentId, SimTime};

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Start,
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::LevelComplete,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Commands are a tagged union so the host can send `{"type": "Pause"}`.
    #[test]
    fn test_player_command_tagged_json() {
        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"Restart"}"#).unwrap();
        assert!(matches!(cmd, PlayerCommand::Restart));

        let json = serde_json::to_string(&PlayerCommand::StartGame).unwrap();
        assert_eq!(json, r#"{"type":"StartGame"}"#);
    }

    #[test]
    fn test_event_serde_carries_type_tag() {
        let event = GameEvent::FragmentCollected {
            fragment: FragmentId(7),
            points: 15,
            multiplier: 1.5,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"FragmentCollected""#), "{json}");
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..10 {
            time.advance(0.1);
        }
        assert_eq!(time.tick, 10);
        assert!((time.now_ms() - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn test_building_extents() {
        let b = Building::new(10.0, -4.0, 6.0, 30.0, 8.0);
        assert_eq!(b.center(), Vec3::new(10.0, 15.0, -4.0));
        assert_eq!(b.min(), Vec3::new(7.0, 0.0, -8.0));
        assert_eq!(b.max(), Vec3::new(13.0, 30.0, 0.0));
    }

    #[test]
    fn test_building_footprint_overlap() {
        let a = Building::new(0.0, 0.0, 10.0, 20.0, 10.0);
        let touching = Building::new(10.0, 0.0, 10.0, 20.0, 10.0);
        let overlapping = Building::new(9.0, 3.0, 10.0, 50.0, 10.0);
        assert!(!a.footprint_overlaps(&touching), "shared edge is not overlap");
        assert!(a.footprint_overlaps(&overlapping));
        assert!(overlapping.footprint_overlaps(&a));
    }

    #[test]
    fn test_frame_input_forward() {
        let input = FrameInput::at(Vec3::ZERO, std::f32::consts::FRAC_PI_2);
        assert!((input.forward() - Vec3::X).length() < 1e-5);
        assert!(!input.fire);
        assert!(input.with_fire().fire);
    }

    #[test]
    fn test_tuning_defaults_match_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.projectile_pool_size, PROJECTILE_POOL_SIZE);
        assert_eq!(tuning.drone_target_count, DRONE_TARGET_COUNT);
        assert_eq!(tuning.projectile_hitbox_radius, PROJECTILE_HITBOX_RADIUS);
        assert!((tuning.drone_release_radius() - 60.0).abs() < 1e-5);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_tuning_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json_str(r#"{ "drone_target_count": 4, "projectile_speed": 250.0 }"#)
            .unwrap();
        assert_eq!(tuning.drone_target_count, 4);
        assert_eq!(tuning.projectile_speed, 250.0);
        assert_eq!(tuning.drone_pool_size, DRONE_POOL_SIZE);
    }

    #[test]
    fn test_tuning_rejects_malformed_json() {
        let err = Tuning::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_tuning_rejects_zero_capacity() {
        let err = Tuning::from_json_str(r#"{ "projectile_pool_size": 0 }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "projectile_pool_size"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_tuning_rejects_negative_radius() {
        let err = Tuning::from_json_str(r#"{ "drone_detection_radius": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "drone_detection_radius",
                ..
            }
        ));
    }

    #[test]
    fn test_pool_error_messages() {
        let exhausted = PoolError::Exhausted { capacity: 30 };
        assert_eq!(
            exhausted.to_string(),
            "pool exhausted: all 30 entities are active"
        );
        let not_owned = PoolError::NotOwned {
            index: 3,
            generation: 2,
        };
        assert!(not_owned.to_string().contains("not owned"));
    }
}
