#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use xmachina_core::config::Tuning;
    use xmachina_core::constants::*;
    use xmachina_core::types::{Building, FragmentId};
    use xmachina_spatial::BuildingQueries;

    use crate::city::{crosses_conduit, generate_city};
    use crate::fragments::{is_open_air, place_fragments};
    use crate::generate_level;

    #[test]
    fn test_buildings_avoid_conduits_and_each_other() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let buildings = generate_city(&mut rng, CITY_SIZE, BUILDING_COUNT);
        assert!(!buildings.is_empty());
        assert!(buildings.len() <= BUILDING_COUNT);

        for (i, a) in buildings.iter().enumerate() {
            assert!(!crosses_conduit(a), "building {i} sits on a conduit");
            for b in &buildings[i + 1..] {
                assert!(!a.footprint_overlaps(b));
            }
        }
    }

    #[test]
    fn test_building_dimensions_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let half = CITY_SIZE / 2.0;
        for b in generate_city(&mut rng, CITY_SIZE, BUILDING_COUNT) {
            assert!(b.width >= BUILDING_MIN_FOOTPRINT && b.width < BUILDING_MAX_FOOTPRINT);
            assert!(b.depth >= BUILDING_MIN_FOOTPRINT && b.depth < BUILDING_MAX_FOOTPRINT);
            assert!(b.height >= BUILDING_MIN_HEIGHT && b.height < BUILDING_MAX_HEIGHT);
            assert!(b.x.abs() <= half && b.z.abs() <= half);
        }
    }

    #[test]
    fn test_conduit_check() {
        // Centered beside the X-axis corridor but wide enough to reach it.
        assert!(crosses_conduit(&Building::new(100.0, 20.0, 10.0, 30.0, 12.0)));
        assert!(!crosses_conduit(&Building::new(100.0, 40.0, 10.0, 30.0, 12.0)));
        assert!(crosses_conduit(&Building::new(0.0, 100.0, 10.0, 30.0, 10.0)));
    }

    #[test]
    fn test_fragments_in_open_air() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let buildings = generate_city(&mut rng, CITY_SIZE, BUILDING_COUNT);
        let fragments = place_fragments(&mut rng, CITY_SIZE, DATA_FRAGMENT_COUNT, &buildings);
        assert_eq!(fragments.len(), DATA_FRAGMENT_COUNT);

        for (i, f) in fragments.iter().enumerate() {
            assert_eq!(f.id, FragmentId(i as u32));
            assert!(!f.collected);
            assert!(f.position.y >= FRAGMENT_MIN_HEIGHT && f.position.y < FRAGMENT_MAX_HEIGHT);
            assert!(buildings.iter().all(|b| !b.contains_point(f.position)));
        }
    }

    #[test]
    fn test_fragment_skipped_when_city_is_solid() {
        // One block covering the whole city up past the fragment band.
        let solid = [Building::new(0.0, 0.0, 1000.0, 200.0, 1000.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(place_fragments(&mut rng, CITY_SIZE, 3, &solid).is_empty());
        assert!(!is_open_air(glam::Vec3::new(0.0, 10.0, 0.0), &solid));
    }

    #[test]
    fn test_level_is_deterministic_per_seed() {
        let tuning = Tuning::default();
        let a = generate_level(&mut ChaCha8Rng::seed_from_u64(77), &tuning);
        let b = generate_level(&mut ChaCha8Rng::seed_from_u64(77), &tuning);
        let c = generate_level(&mut ChaCha8Rng::seed_from_u64(78), &tuning);
        assert_eq!(a, b);
        assert_ne!(a.buildings, c.buildings);
    }
}
