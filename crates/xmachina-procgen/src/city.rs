//! City block layout.
//!
//! Two energy conduits cross at the origin, one along each horizontal axis.
//! Buildings are dropped at random positions that keep clear of both
//! conduits and of every building already placed. A building that finds no
//! free spot within the attempt budget is skipped, so the city may end up
//! with fewer buildings than requested.

use rand::Rng;

use xmachina_core::constants::*;
use xmachina_core::types::Building;

/// Lay out up to `count` buildings inside a `city_size` square.
pub fn generate_city<R: Rng>(rng: &mut R, city_size: f32, count: usize) -> Vec<Building> {
    let half = city_size / 2.0;
    let mut buildings: Vec<Building> = Vec::with_capacity(count);
    let mut skipped = 0usize;

    for _ in 0..count {
        let width = rng.gen_range(BUILDING_MIN_FOOTPRINT..BUILDING_MAX_FOOTPRINT);
        let height = rng.gen_range(BUILDING_MIN_HEIGHT..BUILDING_MAX_HEIGHT);
        let depth = rng.gen_range(BUILDING_MIN_FOOTPRINT..BUILDING_MAX_FOOTPRINT);

        let mut placed = None;
        for _ in 0..BUILDING_PLACEMENT_ATTEMPTS {
            let candidate = Building::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                width,
                height,
                depth,
            );
            if crosses_conduit(&candidate) {
                continue;
            }
            if buildings.iter().any(|b| b.footprint_overlaps(&candidate)) {
                continue;
            }
            placed = Some(candidate);
            break;
        }

        match placed {
            Some(building) => buildings.push(building),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::debug!("City layout skipped {skipped} buildings with no free position");
    }
    buildings
}

/// Whether a footprint reaches into either conduit corridor.
pub fn crosses_conduit(building: &Building) -> bool {
    let corridor = ENERGY_CONDUIT_WIDTH / 2.0;
    building.z.abs() < corridor + building.half_depth()
        || building.x.abs() < corridor + building.half_width()
}
