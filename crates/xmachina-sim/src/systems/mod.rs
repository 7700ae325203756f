//! Gameplay systems run by the engine each tick.
//!
//! Each system owns the pool for its entity kind; nothing else mutates it.
//! Cross-system effects go through method calls and the tick's event list.

pub mod drones;
pub mod explosion;
pub mod fragments;
pub mod player;
pub mod projectile;
pub mod snapshot;
