//! Data fragment pickup and the chain multiplier.

use glam::Vec3;

use xmachina_core::constants::*;
use xmachina_core::events::GameEvent;
use xmachina_core::types::{Fragment, FragmentId};
use xmachina_spatial::collision::within_radius;

/// The level's fragments plus scoring state.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentField {
    fragments: Vec<Fragment>,
    pub score: u32,
    pub multiplier: f32,
    last_pickup_ms: Option<f64>,
}

impl FragmentField {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self {
            fragments,
            score: 0,
            multiplier: 1.0,
            last_pickup_ms: None,
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn total(&self) -> usize {
        self.fragments.len()
    }

    pub fn collected(&self) -> usize {
        self.fragments.iter().filter(|f| f.collected).count()
    }

    pub fn remaining(&self) -> usize {
        self.total() - self.collected()
    }

    pub fn uncollected(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(|f| !f.collected)
    }

    /// Decay the multiplier, then pick up at most one fragment near the ship.
    ///
    /// Emits `FragmentCollected`, and `LevelComplete` when that was the last
    /// one. Returns the collected id.
    pub fn update(
        &mut self,
        dt_secs: f32,
        now_ms: f64,
        ship_position: Vec3,
        events: &mut Vec<GameEvent>,
    ) -> Option<FragmentId> {
        self.decay(dt_secs, now_ms);

        let fragment = self
            .fragments
            .iter_mut()
            .filter(|f| !f.collected)
            .find(|f| within_radius(f.position, ship_position, FRAGMENT_COLLECT_RADIUS))?;
        fragment.collected = true;
        let id = fragment.id;

        let chained = self
            .last_pickup_ms
            .is_some_and(|last| now_ms - last < MULTIPLIER_CHAIN_WINDOW_MS);
        self.multiplier = if chained {
            (self.multiplier + MULTIPLIER_STEP).min(MAX_MULTIPLIER)
        } else {
            1.0
        };
        self.last_pickup_ms = Some(now_ms);

        let points = (FRAGMENT_BASE_POINTS * self.multiplier).floor() as u32;
        self.score += points;
        events.push(GameEvent::FragmentCollected {
            fragment: id,
            points,
            multiplier: self.multiplier,
        });

        if self.remaining() == 0 {
            events.push(GameEvent::LevelComplete { score: self.score });
        }
        Some(id)
    }

    fn decay(&mut self, dt_secs: f32, now_ms: f64) {
        if self.multiplier <= 1.0 {
            return;
        }
        let idle = self
            .last_pickup_ms
            .map_or(true, |last| now_ms - last > MULTIPLIER_DECAY_DELAY_MS);
        if idle {
            self.multiplier = (self.multiplier - dt_secs * MULTIPLIER_DECAY_RATE).max(1.0);
        }
    }
}
