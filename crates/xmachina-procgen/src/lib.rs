//! Procedural level generation for X-Machina.
//!
//! Lays out the city blocks around the two energy conduits and scatters
//! data fragments in the open air between them. Everything is driven by
//! the caller's RNG so a seed reproduces a level exactly.

pub mod city;
pub mod fragments;

use rand::Rng;

use xmachina_core::config::Tuning;
use xmachina_core::types::{Building, Fragment};

pub use xmachina_core as core;

/// Static layout of one level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Level {
    pub buildings: Vec<Building>,
    pub fragments: Vec<Fragment>,
}

/// Generate buildings first, then fragments clear of them.
pub fn generate_level<R: Rng>(rng: &mut R, tuning: &Tuning) -> Level {
    let buildings = city::generate_city(rng, tuning.city_size, tuning.building_count);
    let fragments =
        fragments::place_fragments(rng, tuning.city_size, tuning.fragment_count, &buildings);
    log::info!(
        "Generated level: {} buildings, {} fragments",
        buildings.len(),
        fragments.len()
    );
    Level {
        buildings,
        fragments,
    }
}

#[cfg(test)]
mod tests;
