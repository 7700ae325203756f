//! Fixed-capacity entity pool.
//!
//! Every entity of one kind is allocated when the pool is built. Spawning
//! moves a slot from `available` to `active`; despawning resets it and moves
//! it back. The pool never grows: when it runs dry the caller drops the
//! request.

use glam::Vec3;

use xmachina_core::components::{Drone, ExplosionEffect, PoolHandle, Projectile};
use xmachina_core::error::PoolError;
use xmachina_core::state::PoolStats;

/// An entity that can be returned to an inert state for reuse.
pub trait Poolable {
    /// Return to the inert defaults: invisible, motionless, at the origin.
    fn reset(&mut self);
}

impl Poolable for Projectile {
    fn reset(&mut self) {
        *self = Projectile::default();
    }
}

impl Poolable for Drone {
    fn reset(&mut self) {
        *self = Drone::default();
    }
}

impl Poolable for ExplosionEffect {
    fn reset(&mut self) {
        // Keep the particle buffer allocated.
        for particle in &mut self.particles {
            *particle = Default::default();
        }
        self.origin = Vec3::ZERO;
        self.opacity = 0.0;
        self.scale = 1.0;
        self.active = false;
    }
}

/// Owns all entities of one kind.
///
/// Invariant: each slot is either in `available` or in `active`, never both,
/// so `active + available == capacity` at all times.
#[derive(Debug)]
pub struct EntityPool<T> {
    label: &'static str,
    slots: Vec<T>,
    generations: Vec<u32>,
    in_use: Vec<bool>,
    /// LIFO stack of free slot indices.
    available: Vec<u32>,
    /// Active slot indices in activation order.
    active: Vec<u32>,
}

impl<T: Poolable + Default> EntityPool<T> {
    /// Build a pool of `capacity` default entities.
    pub fn new(label: &'static str, capacity: usize) -> Self {
        Self::with_factory(label, capacity, T::default)
    }
}

impl<T: Poolable> EntityPool<T> {
    /// Build a pool of `capacity` entities made by `make`.
    pub fn with_factory(label: &'static str, capacity: usize, mut make: impl FnMut() -> T) -> Self {
        let slots: Vec<T> = (0..capacity).map(|_| make()).collect();
        // Reversed so the first acquire hands out slot 0.
        let available = (0..capacity as u32).rev().collect();
        Self {
            label,
            slots,
            generations: vec![0; capacity],
            in_use: vec![false; capacity],
            available,
            active: Vec::with_capacity(capacity),
        }
    }

    /// Take the most recently released slot.
    pub fn acquire(&mut self) -> Result<PoolHandle, PoolError> {
        let Some(index) = self.available.pop() else {
            return Err(PoolError::Exhausted {
                capacity: self.capacity(),
            });
        };
        let slot = index as usize;
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.in_use[slot] = true;
        self.active.push(index);
        Ok(PoolHandle {
            index,
            generation: self.generations[slot],
        })
    }

    /// Reset the entity behind `handle` and return its slot.
    ///
    /// Fails with `NotOwned` for handles that are not currently active,
    /// including stale generations and double releases. Counts are left
    /// untouched on failure.
    pub fn release(&mut self, handle: PoolHandle) -> Result<(), PoolError> {
        if !self.owns(handle) {
            let err = PoolError::NotOwned {
                index: handle.index,
                generation: handle.generation,
            };
            log::error!("{} pool: {err}", self.label);
            return Err(err);
        }
        let slot = handle.index as usize;
        self.slots[slot].reset();
        self.in_use[slot] = false;
        if let Some(pos) = self.active.iter().position(|&i| i == handle.index) {
            self.active.remove(pos);
        }
        self.available.push(handle.index);
        Ok(())
    }

    /// Release every active entity. Returns how many were released.
    pub fn release_all(&mut self) -> usize {
        let released = self.active.len();
        for index in std::mem::take(&mut self.active) {
            let slot = index as usize;
            self.slots[slot].reset();
            self.in_use[slot] = false;
            self.available.push(index);
        }
        released
    }

    /// Whether `handle` names a currently active entity.
    pub fn owns(&self, handle: PoolHandle) -> bool {
        let slot = handle.index as usize;
        slot < self.slots.len() && self.in_use[slot] && self.generations[slot] == handle.generation
    }

    pub fn get(&self, handle: PoolHandle) -> Option<&T> {
        if self.owns(handle) {
            self.slots.get(handle.index as usize)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, handle: PoolHandle) -> Option<&mut T> {
        if self.owns(handle) {
            self.slots.get_mut(handle.index as usize)
        } else {
            None
        }
    }

    /// Active entities in activation order.
    pub fn iter_active(&self) -> impl Iterator<Item = (PoolHandle, &T)> + '_ {
        self.active.iter().map(move |&index| {
            let slot = index as usize;
            (
                PoolHandle {
                    index,
                    generation: self.generations[slot],
                },
                &self.slots[slot],
            )
        })
    }

    /// Snapshot of active handles, for loops that release while iterating.
    pub fn active_handles(&self) -> Vec<PoolHandle> {
        self.iter_active().map(|(handle, _)| handle).collect()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            active: self.active_count(),
            available: self.available_count(),
            total: self.capacity(),
        }
    }
}
