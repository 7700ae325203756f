//! Data fragment placement.

use glam::Vec3;
use rand::Rng;

use xmachina_core::constants::*;
use xmachina_core::types::{Building, Fragment, FragmentId};
use xmachina_spatial::BuildingQueries;

/// Scatter `count` fragments in open air.
///
/// Ids are assigned in placement order starting at 0. A fragment that keeps
/// landing inside buildings is dropped after the attempt budget.
pub fn place_fragments<R: Rng>(
    rng: &mut R,
    city_size: f32,
    count: usize,
    buildings: &[Building],
) -> Vec<Fragment> {
    let half = city_size / 2.0;
    let mut fragments = Vec::with_capacity(count);

    for _ in 0..count {
        let position = (0..FRAGMENT_PLACEMENT_ATTEMPTS)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(FRAGMENT_MIN_HEIGHT..FRAGMENT_MAX_HEIGHT),
                    rng.gen_range(-half..half),
                )
            })
            .find(|candidate| is_open_air(*candidate, buildings));

        match position {
            Some(position) => fragments.push(Fragment {
                id: FragmentId(fragments.len() as u32),
                position,
                collected: false,
            }),
            None => log::warn!("No open position found for a data fragment, skipping it"),
        }
    }

    fragments
}

/// True when `point` is outside every building.
pub fn is_open_air(point: Vec3, buildings: &[Building]) -> bool {
    !buildings.iter().any(|b| b.contains_point(point))
}
